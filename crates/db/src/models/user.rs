//! User entity model and DTOs.
//!
//! Account lifecycle and authentication live outside this service; the
//! row exists as the referential anchor for visits and badges.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wandr_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub display_name: String,
    pub email: String,
}
