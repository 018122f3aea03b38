//! Repository for the `user_badges` table.
//!
//! The insert path is the atomic check-and-insert the award detector
//! depends on: `ON CONFLICT DO NOTHING RETURNING` against
//! `uq_user_badges_user_location_tier` means that under concurrent
//! recordings exactly one caller gets the row back and every loser gets
//! `None` -- a silent, normal outcome, never an error.

use sqlx::PgPool;
use wandr_core::tier::BadgeTier;
use wandr_core::types::DbId;

use crate::models::user_badge::{KindCountRow, TierCountRow, UserBadge};

/// Column list for `user_badges` queries.
const COLUMNS: &str = "id, user_id, location_id, tier, earned_at, created_at";

/// Provides insert and aggregation operations for badge awards.
pub struct UserBadgeRepo;

impl UserBadgeRepo {
    /// Insert a badge if the `(user, location, tier)` key is not already
    /// taken.
    ///
    /// Returns the inserted row, or `None` when the badge was already
    /// issued (by an earlier call or by a concurrent one that won the
    /// race).
    pub async fn insert_if_new(
        pool: &PgPool,
        user_id: DbId,
        location_id: DbId,
        tier: BadgeTier,
    ) -> Result<Option<UserBadge>, sqlx::Error> {
        sqlx::query_as::<_, UserBadge>(&format!(
            "INSERT INTO user_badges (user_id, location_id, tier) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_user_badges_user_location_tier DO NOTHING \
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(location_id)
        .bind(tier.as_str())
        .fetch_optional(pool)
        .await
    }

    /// The highest tier already issued to a user for a location, or
    /// `BadgeTier::None` when no badge exists yet.
    ///
    /// Tier ordering is a domain rule, so the rows are folded through
    /// the enum instead of sorting the strings in SQL.
    pub async fn highest_tier(
        pool: &PgPool,
        user_id: DbId,
        location_id: DbId,
    ) -> Result<BadgeTier, sqlx::Error> {
        let tiers: Vec<String> = sqlx::query_scalar(
            "SELECT tier FROM user_badges WHERE user_id = $1 AND location_id = $2",
        )
        .bind(user_id)
        .bind(location_id)
        .fetch_all(pool)
        .await?;

        let mut highest = BadgeTier::None;
        for tier in tiers {
            let tier = BadgeTier::from_str_value(&tier)
                .map_err(|e| sqlx::Error::Decode(e.into()))?;
            highest = highest.max(tier);
        }
        Ok(highest)
    }

    /// List a user's badges, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserBadge>, sqlx::Error> {
        sqlx::query_as::<_, UserBadge>(&format!(
            "SELECT {COLUMNS} FROM user_badges \
             WHERE user_id = $1 \
             ORDER BY earned_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Total number of badges a user holds.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_badges WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Badge counts grouped by tier.
    pub async fn counts_by_tier(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TierCountRow>, sqlx::Error> {
        sqlx::query_as::<_, TierCountRow>(
            "SELECT tier, COUNT(*) AS count \
             FROM user_badges \
             WHERE user_id = $1 \
             GROUP BY tier",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Badge counts grouped by the badge location's kind.
    pub async fn counts_by_kind(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<KindCountRow>, sqlx::Error> {
        sqlx::query_as::<_, KindCountRow>(
            "SELECT l.kind, COUNT(*) AS count \
             FROM user_badges b \
             JOIN locations l ON l.id = b.location_id \
             WHERE b.user_id = $1 \
             GROUP BY l.kind",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
