//! Repository for the `locations` table and hierarchy reads.

use sqlx::PgPool;
use wandr_core::location::LocationKind;
use wandr_core::types::DbId;

use crate::models::location::{AncestorChain, AncestorRow, CreateLocation, Location};

/// Column list for `locations` queries.
const COLUMNS: &str = "id, kind, name, parent_id, total_attractions, created_at, updated_at";

/// Provides CRUD and ancestor-resolution operations for location nodes.
pub struct LocationRepo;

impl LocationRepo {
    /// Create a location node, returning the generated ID.
    ///
    /// The caller is responsible for supplying a parent of the correct
    /// kind; the schema enforces only that continents are roots and
    /// everything else has a parent.
    pub async fn create(pool: &PgPool, data: &CreateLocation) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO locations (kind, name, parent_id) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(data.kind.as_str())
        .bind(&data.name)
        .bind(data.parent_id)
        .fetch_one(pool)
        .await
    }

    /// Find a location by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(&format!("SELECT {COLUMNS} FROM locations WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List locations, optionally filtered by kind and/or parent.
    pub async fn list(
        pool: &PgPool,
        kind: Option<LocationKind>,
        parent_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Location>, sqlx::Error> {
        let mut filters = String::new();
        if kind.is_some() {
            filters.push_str(" AND kind = $3");
        }
        if parent_id.is_some() {
            // Placeholder number depends on whether kind is present.
            filters.push_str(if kind.is_some() {
                " AND parent_id = $4"
            } else {
                " AND parent_id = $3"
            });
        }
        let query = format!(
            "SELECT {COLUMNS} FROM locations \
             WHERE true{filters} \
             ORDER BY name \
             LIMIT $1 OFFSET $2"
        );

        let mut q = sqlx::query_as::<_, Location>(&query).bind(limit).bind(offset);
        if let Some(kind) = kind {
            q = q.bind(kind.as_str());
        }
        if let Some(parent_id) = parent_id {
            q = q.bind(parent_id);
        }
        q.fetch_all(pool).await
    }

    /// Resolve an attraction's full ancestor chain (city, country,
    /// continent), each node carrying its `total_attractions` count.
    ///
    /// Returns `None` if the attraction id is unknown. A malformed tree
    /// (city without a country, country without a continent) also yields
    /// `None` because the inner joins find no row; the schema's parent
    /// constraints keep that from happening in practice.
    pub async fn ancestors_of_attraction(
        pool: &PgPool,
        attraction_id: DbId,
    ) -> Result<Option<AncestorChain>, sqlx::Error> {
        let row = sqlx::query_as::<_, AncestorRow>(
            "SELECT \
                city.id AS city_id, \
                city.name AS city_name, \
                city.total_attractions AS city_total, \
                country.id AS country_id, \
                country.name AS country_name, \
                country.total_attractions AS country_total, \
                continent.id AS continent_id, \
                continent.name AS continent_name, \
                continent.total_attractions AS continent_total \
             FROM attractions a \
             JOIN locations city ON city.id = a.city_id \
             JOIN locations country ON country.id = city.parent_id \
             JOIN locations continent ON continent.id = country.parent_id \
             WHERE a.id = $1",
        )
        .bind(attraction_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(AncestorChain::from))
    }
}
