//! Location hierarchy entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wandr_core::location::LocationKind;
use wandr_core::types::{DbId, Timestamp};

/// Full location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    /// Kind string as stored; see [`Location::kind`] for the typed view.
    pub kind: String,
    pub name: String,
    /// `None` only for continents.
    pub parent_id: Option<DbId>,
    /// Denormalized count of attraction leaves under this node.
    pub total_attractions: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Location {
    /// Typed view of the `kind` column.
    ///
    /// The CHECK constraint keeps the column within the valid set, so a
    /// decode failure here means the constraint was bypassed.
    pub fn kind(&self) -> Result<LocationKind, String> {
        LocationKind::from_str_value(&self.kind)
    }
}

/// DTO for creating a location node.
#[derive(Debug, Deserialize)]
pub struct CreateLocation {
    pub kind: LocationKind,
    pub name: String,
    pub parent_id: Option<DbId>,
}

/// One resolved ancestor of an attraction, with the count the progress
/// calculator needs.
#[derive(Debug, Clone, Serialize)]
pub struct AncestorNode {
    pub id: DbId,
    pub name: String,
    pub kind: LocationKind,
    pub total_attractions: i32,
}

/// The full ancestor chain of an attraction: its city, that city's
/// country, and that country's continent.
#[derive(Debug, Clone, Serialize)]
pub struct AncestorChain {
    pub city: AncestorNode,
    pub country: AncestorNode,
    pub continent: AncestorNode,
}

impl AncestorChain {
    /// The chain leaf-first, the order award scans walk it.
    pub fn nodes(&self) -> [&AncestorNode; 3] {
        [&self.city, &self.country, &self.continent]
    }
}

/// Flat row shape for the 3-way ancestor join.
#[derive(Debug, FromRow)]
pub struct AncestorRow {
    pub city_id: DbId,
    pub city_name: String,
    pub city_total: i32,
    pub country_id: DbId,
    pub country_name: String,
    pub country_total: i32,
    pub continent_id: DbId,
    pub continent_name: String,
    pub continent_total: i32,
}

impl From<AncestorRow> for AncestorChain {
    fn from(row: AncestorRow) -> Self {
        Self {
            city: AncestorNode {
                id: row.city_id,
                name: row.city_name,
                kind: LocationKind::City,
                total_attractions: row.city_total,
            },
            country: AncestorNode {
                id: row.country_id,
                name: row.country_name,
                kind: LocationKind::Country,
                total_attractions: row.country_total,
            },
            continent: AncestorNode {
                id: row.continent_id,
                name: row.continent_name,
                kind: LocationKind::Continent,
                total_attractions: row.continent_total,
            },
        }
    }
}
