//! Attraction entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wandr_core::types::{DbId, Timestamp};

/// Full attraction row from the `attractions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attraction {
    pub id: DbId,
    pub city_id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new attraction.
#[derive(Debug, Deserialize)]
pub struct CreateAttraction {
    pub city_id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}
