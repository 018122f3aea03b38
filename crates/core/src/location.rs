//! Location hierarchy vocabulary.
//!
//! Wandr organizes attractions in a fixed 3-level tree: continents own
//! countries, countries own cities, cities own attraction leaves.
//! Attractions themselves are not a [`LocationKind`]; they are a
//! separate entity keyed by their city.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Kind strings as stored in the `locations.kind` column.
pub const KIND_CONTINENT: &str = "continent";
pub const KIND_COUNTRY: &str = "country";
pub const KIND_CITY: &str = "city";

/// All valid location kind strings, root first.
pub const VALID_KINDS: &[&str] = &[KIND_CONTINENT, KIND_COUNTRY, KIND_CITY];

// ---------------------------------------------------------------------------
// LocationKind
// ---------------------------------------------------------------------------

/// The level of a node in the location tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Continent,
    Country,
    City,
}

impl LocationKind {
    /// Every kind, root first.
    pub const ALL: [LocationKind; 3] = [Self::Continent, Self::Country, Self::City];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            KIND_CONTINENT => Ok(Self::Continent),
            KIND_COUNTRY => Ok(Self::Country),
            KIND_CITY => Ok(Self::City),
            _ => Err(format!(
                "Invalid location kind '{s}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continent => KIND_CONTINENT,
            Self::Country => KIND_COUNTRY,
            Self::City => KIND_CITY,
        }
    }

    /// The kind a node's parent must have, or `None` for the root level.
    pub fn parent_kind(self) -> Option<Self> {
        match self {
            Self::Continent => None,
            Self::Country => Some(Self::Continent),
            Self::City => Some(Self::Country),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
