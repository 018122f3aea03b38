//! Repository for the `attractions` table.
//!
//! Attraction writes maintain the denormalized `total_attractions`
//! counters on the whole ancestor chain in the same transaction, so the
//! progress calculator always sees counts that match the tree.

use sqlx::PgPool;
use wandr_core::types::DbId;

use crate::models::attraction::{Attraction, CreateAttraction};

/// Column list for `attractions` queries.
const COLUMNS: &str = "id, city_id, name, category, description, created_at, updated_at";

/// Adjust `total_attractions` on a city and all its ancestors.
const BUMP_TOTALS: &str = "WITH RECURSIVE chain AS ( \
        SELECT id, parent_id FROM locations WHERE id = $1 \
        UNION ALL \
        SELECT l.id, l.parent_id FROM locations l JOIN chain c ON l.id = c.parent_id \
     ) \
     UPDATE locations \
     SET total_attractions = total_attractions + $2, updated_at = now() \
     WHERE id IN (SELECT id FROM chain)";

/// Provides CRUD operations for attractions.
pub struct AttractionRepo;

impl AttractionRepo {
    /// Create an attraction and increment its ancestors' counts,
    /// returning the generated ID.
    pub async fn create(pool: &PgPool, data: &CreateAttraction) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO attractions (city_id, name, category, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(data.city_id)
        .bind(&data.name)
        .bind(data.category.as_deref())
        .bind(data.description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(BUMP_TOTALS)
            .bind(data.city_id)
            .bind(1i32)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Find an attraction by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attraction>, sqlx::Error> {
        sqlx::query_as::<_, Attraction>(&format!("SELECT {COLUMNS} FROM attractions WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the attractions of a city.
    pub async fn list_by_city(
        pool: &PgPool,
        city_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Attraction>, sqlx::Error> {
        sqlx::query_as::<_, Attraction>(&format!(
            "SELECT {COLUMNS} FROM attractions \
             WHERE city_id = $1 \
             ORDER BY name \
             LIMIT $2 OFFSET $3"
        ))
        .bind(city_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Delete an attraction and decrement its ancestors' counts.
    ///
    /// Returns `true` if a row was deleted. Existing badges earned
    /// against the larger totals are untouched; only future progress
    /// output changes.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let city_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM attractions WHERE id = $1 RETURNING city_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(city_id) = city_id else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query(BUMP_TOTALS)
            .bind(city_id)
            .bind(-1i32)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
