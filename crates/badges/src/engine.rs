//! Visit recording and badge award detection.

use serde::Serialize;

use wandr_core::error::CoreError;
use wandr_core::location::LocationKind;
use wandr_core::progress::compute_progress;
use wandr_core::tier::tiers_between;
use wandr_core::types::DbId;
use wandr_db::models::location::AncestorNode;
use wandr_db::models::user_badge::UserBadge;
use wandr_db::models::visit::Visit;
use wandr_db::repositories::{LocationRepo, UserBadgeRepo, UserRepo, VisitRepo};
use wandr_db::DbPool;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for engine operations.
///
/// Storage errors propagate unchanged; the engine adds no retry logic of
/// its own.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A domain-level error from `wandr_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for engine return values.
pub type EngineResult<T> = Result<T, EngineError>;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A badge issued by this call, enriched with the location fields the
/// presentation layer shows in the award animation.
#[derive(Debug, Clone, Serialize)]
pub struct NewBadge {
    pub badge: UserBadge,
    pub location_name: String,
    pub location_kind: LocationKind,
}

/// Result of recording a visit.
#[derive(Debug, Clone, Serialize)]
pub struct VisitOutcome {
    /// The visit row (existing one when the recording was a replay).
    pub visit: Visit,
    /// Whether this call inserted the visit. A replay reports `false`.
    pub newly_recorded: bool,
    /// Badges issued by this call, lowest tier first per node, in
    /// city -> country -> continent order.
    pub new_badges: Vec<NewBadge>,
}

// ---------------------------------------------------------------------------
// BadgeEngine
// ---------------------------------------------------------------------------

/// The badge progress engine.
///
/// Cheaply cloneable; wraps the shared connection pool. All state lives
/// in the database -- the engine holds no caches, so every computation
/// sees the current visit set.
#[derive(Clone)]
pub struct BadgeEngine {
    pool: DbPool,
}

impl BadgeEngine {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool (read-side projections live in
    /// `progress.rs` and share it).
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Record a verified visit and detect newly earned badges.
    ///
    /// Idempotent: replaying the same `(user, attraction)` pair inserts
    /// nothing and returns an empty `new_badges` list, because every
    /// tier found by the award scan is already issued. The scan also
    /// runs on replays on purpose -- a process that died between the
    /// visit insert and the award inserts heals on the next call.
    pub async fn record_visit(
        &self,
        user_id: DbId,
        attraction_id: DbId,
    ) -> EngineResult<VisitOutcome> {
        if !UserRepo::exists(&self.pool, user_id).await? {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }

        // Resolve ancestors before writing anything: an unknown
        // attraction must not leave a visit row behind.
        let chain = LocationRepo::ancestors_of_attraction(&self.pool, attraction_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Attraction",
                id: attraction_id,
            })?;

        let inserted = VisitRepo::record(&self.pool, user_id, attraction_id).await?;
        let newly_recorded = inserted.is_some();
        let visit = match inserted {
            Some(visit) => {
                tracing::info!(user_id, attraction_id, "Visit recorded");
                visit
            }
            None => VisitRepo::find(&self.pool, user_id, attraction_id)
                .await?
                .ok_or_else(|| {
                    // The insert conflicted, so the row must exist.
                    CoreError::Internal(format!(
                        "visit ({user_id}, {attraction_id}) vanished between insert and read"
                    ))
                })?,
        };

        let mut new_badges = Vec::new();
        for node in chain.nodes() {
            new_badges.extend(self.scan_node(user_id, node).await?);
        }

        Ok(VisitOutcome {
            visit,
            newly_recorded,
            new_badges,
        })
    }

    /// Recompute one node's tier and issue every rung crossed since the
    /// highest badge already on record.
    async fn scan_node(&self, user_id: DbId, node: &AncestorNode) -> EngineResult<Vec<NewBadge>> {
        let visited =
            VisitRepo::count_visited_under(&self.pool, user_id, node.id, node.kind).await?;
        let progress = compute_progress(visited, i64::from(node.total_attractions));
        let prior = UserBadgeRepo::highest_tier(&self.pool, user_id, node.id).await?;

        let mut awarded = Vec::new();
        for tier in tiers_between(prior, progress.current_tier) {
            match UserBadgeRepo::insert_if_new(&self.pool, user_id, node.id, tier).await? {
                Some(badge) => {
                    tracing::info!(
                        user_id,
                        location_id = node.id,
                        location_kind = node.kind.as_str(),
                        tier = tier.as_str(),
                        "Badge awarded"
                    );
                    awarded.push(NewBadge {
                        badge,
                        location_name: node.name.clone(),
                        location_kind: node.kind,
                    });
                }
                // A concurrent recording won the race for this tier;
                // it is already awarded, so this call omits it.
                None => {}
            }
        }
        Ok(awarded)
    }

    /// List a user's badge awards, newest first.
    pub async fn badges(
        &self,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<UserBadge>> {
        self.require_user(user_id).await?;
        Ok(UserBadgeRepo::list_for_user(&self.pool, user_id, limit, offset).await?)
    }

    /// Return `NotFound` unless the user exists.
    pub(crate) async fn require_user(&self, user_id: DbId) -> EngineResult<()> {
        if UserRepo::exists(&self.pool, user_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into())
        }
    }
}
