//! Verified visit model.
//!
//! A visit is an immutable fact: at most one row per
//! `(user_id, attraction_id)` pair. Re-recording is a no-op, so the set
//! semantics the aggregation queries rely on hold by construction.

use serde::Serialize;
use sqlx::FromRow;
use wandr_core::types::{DbId, Timestamp};

/// Full visit row from the `user_visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visit {
    pub id: DbId,
    pub user_id: DbId,
    pub attraction_id: DbId,
    pub verified_at: Timestamp,
    pub created_at: Timestamp,
}

/// Per-node visit aggregation row: how many of a location's attractions
/// one user has visited. Input to the progress projection.
#[derive(Debug, Clone, FromRow)]
pub struct VisitedCountRow {
    pub location_id: DbId,
    pub name: String,
    pub total_attractions: i32,
    pub visited: i64,
}
