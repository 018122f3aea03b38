//! Read-side progress and summary projections.
//!
//! Assembled fresh per request from visit facts and the location
//! hierarchy; nothing here is persisted or cached. `user_badges` rows
//! remain the only durable award record, so totals growing later never
//! removes a badge from the summary.

use serde::Serialize;

use wandr_core::location::LocationKind;
use wandr_core::progress::{compute_progress, BadgeSummary, KindCounts, TierCounts, TierProgress};
use wandr_core::tier::BadgeTier;
use wandr_core::types::DbId;
use wandr_db::models::visit::VisitedCountRow;
use wandr_db::repositories::{UserBadgeRepo, VisitRepo};

use crate::engine::{BadgeEngine, EngineError, EngineResult};

// ---------------------------------------------------------------------------
// Projection types
// ---------------------------------------------------------------------------

/// Progress of one user at one location node, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct LocationProgress {
    pub location_id: DbId,
    pub name: String,
    pub kind: LocationKind,
    pub visited_attractions: i64,
    pub total_attractions: i64,
    #[serde(flatten)]
    pub progress: TierProgress,
}

/// Per-level progress lists for one user.
///
/// Only nodes where the user has at least one visit appear; everything
/// else is implicitly 0% / no tier.
#[derive(Debug, Clone, Serialize)]
pub struct UserProgress {
    pub continents: Vec<LocationProgress>,
    pub countries: Vec<LocationProgress>,
    pub cities: Vec<LocationProgress>,
}

fn project_level(rows: Vec<VisitedCountRow>, kind: LocationKind) -> Vec<LocationProgress> {
    rows.into_iter()
        .map(|row| {
            let total = i64::from(row.total_attractions);
            LocationProgress {
                location_id: row.location_id,
                name: row.name,
                kind,
                visited_attractions: row.visited,
                total_attractions: total,
                progress: compute_progress(row.visited, total),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Engine read side
// ---------------------------------------------------------------------------

impl BadgeEngine {
    /// Per-level badge progress for one user.
    pub async fn progress(&self, user_id: DbId) -> EngineResult<UserProgress> {
        self.require_user(user_id).await?;

        let continents =
            VisitRepo::visited_counts_for(self.pool(), user_id, LocationKind::Continent).await?;
        let countries =
            VisitRepo::visited_counts_for(self.pool(), user_id, LocationKind::Country).await?;
        let cities =
            VisitRepo::visited_counts_for(self.pool(), user_id, LocationKind::City).await?;

        Ok(UserProgress {
            continents: project_level(continents, LocationKind::Continent),
            countries: project_level(countries, LocationKind::Country),
            cities: project_level(cities, LocationKind::City),
        })
    }

    /// Aggregate badge statistics for one user.
    pub async fn summary(&self, user_id: DbId) -> EngineResult<BadgeSummary> {
        self.require_user(user_id).await?;

        let total_badges = UserBadgeRepo::count_for_user(self.pool(), user_id).await?;

        let mut by_tier = TierCounts::default();
        for row in UserBadgeRepo::counts_by_tier(self.pool(), user_id).await? {
            let tier = BadgeTier::from_str_value(&row.tier)
                .map_err(wandr_core::error::CoreError::Internal)
                .map_err(EngineError::from)?;
            by_tier.add(tier, row.count);
        }

        let mut by_kind = KindCounts::default();
        for row in UserBadgeRepo::counts_by_kind(self.pool(), user_id).await? {
            let kind = LocationKind::from_str_value(&row.kind)
                .map_err(wandr_core::error::CoreError::Internal)
                .map_err(EngineError::from)?;
            by_kind.add(kind, row.count);
        }

        Ok(BadgeSummary {
            total_badges,
            by_tier,
            by_kind,
        })
    }
}
