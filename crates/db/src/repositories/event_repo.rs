//! Repository for the `events` table and its type lookup.

use sqlx::PgPool;
use wandr_core::types::{DbId, Timestamp};

use crate::models::event::{Event, EventType};

/// Column list for `events` queries.
const COLUMNS: &str =
    "id, event_type_id, entity_type, entity_id, user_id, payload, occurred_at, created_at";

/// Provides insert and lookup operations for the event log.
pub struct EventRepo;

impl EventRepo {
    /// Resolve an event type name to its lookup row.
    pub async fn get_event_type_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<EventType>, sqlx::Error> {
        sqlx::query_as::<_, EventType>(
            "SELECT id, name, created_at FROM event_types WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Insert an event row, returning the generated ID.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        pool: &PgPool,
        event_type_id: i16,
        entity_type: Option<&str>,
        entity_id: Option<DbId>,
        user_id: Option<DbId>,
        payload: &serde_json::Value,
        occurred_at: Timestamp,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO events \
                (event_type_id, entity_type, entity_id, user_id, payload, occurred_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(event_type_id)
        .bind(entity_type)
        .bind(entity_id)
        .bind(user_id)
        .bind(payload)
        .bind(occurred_at)
        .fetch_one(pool)
        .await
    }

    /// List the most recent events, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {COLUMNS} FROM events \
             ORDER BY occurred_at DESC, id DESC \
             LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
