//! Repository for the `user_visits` table and visit aggregation.
//!
//! Recording is idempotent: the unique constraint on
//! `(user_id, attraction_id)` plus `ON CONFLICT DO NOTHING` makes a
//! repeat recording a no-op instead of an error, and gives the count
//! queries their set semantics.

use sqlx::PgPool;
use wandr_core::location::LocationKind;
use wandr_core::types::DbId;

use crate::models::visit::{Visit, VisitedCountRow};

/// Column list for `user_visits` queries.
const COLUMNS: &str = "id, user_id, attraction_id, verified_at, created_at";

/// Provides insert and aggregation operations for visits.
pub struct VisitRepo;

impl VisitRepo {
    /// Record a visit.
    ///
    /// Returns the inserted row, or `None` when the pair already exists
    /// (the caller distinguishes a fresh visit from a replay this way).
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        attraction_id: DbId,
    ) -> Result<Option<Visit>, sqlx::Error> {
        sqlx::query_as::<_, Visit>(&format!(
            "INSERT INTO user_visits (user_id, attraction_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_user_visits_user_attraction DO NOTHING \
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(attraction_id)
        .fetch_optional(pool)
        .await
    }

    /// Find the visit for a `(user, attraction)` pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        attraction_id: DbId,
    ) -> Result<Option<Visit>, sqlx::Error> {
        sqlx::query_as::<_, Visit>(&format!(
            "SELECT {COLUMNS} FROM user_visits \
             WHERE user_id = $1 AND attraction_id = $2"
        ))
        .bind(user_id)
        .bind(attraction_id)
        .fetch_optional(pool)
        .await
    }

    /// List a user's visits, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Visit>, sqlx::Error> {
        sqlx::query_as::<_, Visit>(&format!(
            "SELECT {COLUMNS} FROM user_visits \
             WHERE user_id = $1 \
             ORDER BY verified_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Total number of visits recorded for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM user_visits WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Count the distinct attractions under a location node that the
    /// user has visited. The join depth depends on the node's kind.
    pub async fn count_visited_under(
        pool: &PgPool,
        user_id: DbId,
        location_id: DbId,
        kind: LocationKind,
    ) -> Result<i64, sqlx::Error> {
        let query = match kind {
            LocationKind::City => {
                "SELECT COUNT(DISTINCT v.attraction_id) \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 WHERE v.user_id = $1 AND a.city_id = $2"
            }
            LocationKind::Country => {
                "SELECT COUNT(DISTINCT v.attraction_id) \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 JOIN locations city ON city.id = a.city_id \
                 WHERE v.user_id = $1 AND city.parent_id = $2"
            }
            LocationKind::Continent => {
                "SELECT COUNT(DISTINCT v.attraction_id) \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 JOIN locations city ON city.id = a.city_id \
                 JOIN locations country ON country.id = city.parent_id \
                 WHERE v.user_id = $1 AND country.parent_id = $2"
            }
        };

        let count: Option<i64> = sqlx::query_scalar(query)
            .bind(user_id)
            .bind(location_id)
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Per-node visited counts for every node of the given kind where
    /// the user has at least one visit. Input to the progress
    /// projection; nodes the user never touched are omitted.
    pub async fn visited_counts_for(
        pool: &PgPool,
        user_id: DbId,
        kind: LocationKind,
    ) -> Result<Vec<VisitedCountRow>, sqlx::Error> {
        let query = match kind {
            LocationKind::City => {
                "SELECT city.id AS location_id, city.name, city.total_attractions, \
                        COUNT(DISTINCT v.attraction_id) AS visited \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 JOIN locations city ON city.id = a.city_id \
                 WHERE v.user_id = $1 \
                 GROUP BY city.id, city.name, city.total_attractions \
                 ORDER BY city.name"
            }
            LocationKind::Country => {
                "SELECT country.id AS location_id, country.name, country.total_attractions, \
                        COUNT(DISTINCT v.attraction_id) AS visited \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 JOIN locations city ON city.id = a.city_id \
                 JOIN locations country ON country.id = city.parent_id \
                 WHERE v.user_id = $1 \
                 GROUP BY country.id, country.name, country.total_attractions \
                 ORDER BY country.name"
            }
            LocationKind::Continent => {
                "SELECT continent.id AS location_id, continent.name, continent.total_attractions, \
                        COUNT(DISTINCT v.attraction_id) AS visited \
                 FROM user_visits v \
                 JOIN attractions a ON a.id = v.attraction_id \
                 JOIN locations city ON city.id = a.city_id \
                 JOIN locations country ON country.id = city.parent_id \
                 JOIN locations continent ON continent.id = country.parent_id \
                 WHERE v.user_id = $1 \
                 GROUP BY continent.id, continent.name, continent.total_attractions \
                 ORDER BY continent.name"
            }
        };

        sqlx::query_as::<_, VisitedCountRow>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
