//! Badge award model.
//!
//! `user_badges` rows are the durable record of what has been awarded.
//! They are insert-only: progress recomputes never update or delete
//! them, which is what makes badges permanent.

use serde::Serialize;
use sqlx::FromRow;
use wandr_core::tier::BadgeTier;
use wandr_core::types::{DbId, Timestamp};

/// Full badge row from the `user_badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBadge {
    pub id: DbId,
    pub user_id: DbId,
    pub location_id: DbId,
    /// Tier string as stored; see [`UserBadge::tier`] for the typed view.
    pub tier: String,
    pub earned_at: Timestamp,
    pub created_at: Timestamp,
}

impl UserBadge {
    /// Typed view of the `tier` column.
    ///
    /// The CHECK constraint keeps the column within the awardable set,
    /// so a decode failure here means the constraint was bypassed.
    pub fn tier(&self) -> Result<BadgeTier, String> {
        BadgeTier::from_str_value(&self.tier)
    }
}

/// Aggregation row: badge count per tier string.
#[derive(Debug, FromRow)]
pub struct TierCountRow {
    pub tier: String,
    pub count: i64,
}

/// Aggregation row: badge count per location kind string.
#[derive(Debug, FromRow)]
pub struct KindCountRow {
    pub kind: String,
    pub count: i64,
}
