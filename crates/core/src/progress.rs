//! Badge progress computation.
//!
//! Pure functions from visit counts to progress percentages and tiers.
//! The caller pre-loads `visited`/`total` from storage; nothing here
//! touches a database. Progress is always recomputed on demand and never
//! persisted -- `user_badges` rows are the only durable record of what
//! has been awarded.

use serde::Serialize;

use crate::tier::BadgeTier;

// ---------------------------------------------------------------------------
// TierProgress
// ---------------------------------------------------------------------------

/// Progress of one user at one location node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    /// Percent of the node's attractions visited, truncated to 0..=100.
    pub percent: u8,
    /// Highest tier whose threshold `percent` meets.
    pub current_tier: BadgeTier,
    /// The tier above `current_tier`, absent at platinum.
    pub next_tier: Option<BadgeTier>,
    /// Percentage points still needed for `next_tier`, 0 at platinum.
    pub to_next_percent: u8,
}

/// Compute progress from visited/total attraction counts.
///
/// The percentage is truncated, never rounded: rounding up could report
/// a tier the user has not actually reached. A node with no attractions
/// yet reports 0% / no tier. `visited > total` means the denormalized
/// `total_attractions` count is stale; the percent is clamped to 100 and
/// a warning logged, because the visit recording itself must still
/// succeed.
pub fn compute_progress(visited: i64, total: i64) -> TierProgress {
    let percent: u8 = if total <= 0 {
        if visited > 0 {
            tracing::warn!(visited, total, "visit count present on a node with no attractions");
        }
        0
    } else if visited > total {
        tracing::warn!(visited, total, "visited exceeds total attractions, clamping to 100%");
        100
    } else {
        // Integer floor; fits in u8 since visited <= total here.
        (visited * 100 / total) as u8
    };

    let current_tier = BadgeTier::for_percent(percent);
    let next_tier = current_tier.next();
    let to_next_percent = next_tier.map(|t| t.threshold() - percent).unwrap_or(0);

    TierProgress {
        percent,
        current_tier,
        next_tier,
        to_next_percent,
    }
}

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Badge counts per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
    pub platinum: i64,
}

impl TierCounts {
    /// Add `count` badges of the given tier.
    ///
    /// `BadgeTier::None` is not a badge and is ignored; rows holding it
    /// cannot exist under the `user_badges` CHECK constraint.
    pub fn add(&mut self, tier: BadgeTier, count: i64) {
        match tier {
            BadgeTier::None => {}
            BadgeTier::Bronze => self.bronze += count,
            BadgeTier::Silver => self.silver += count,
            BadgeTier::Gold => self.gold += count,
            BadgeTier::Platinum => self.platinum += count,
        }
    }

    pub fn total(&self) -> i64 {
        self.bronze + self.silver + self.gold + self.platinum
    }
}

/// Badge counts per location kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub continents: i64,
    pub countries: i64,
    pub cities: i64,
}

impl KindCounts {
    pub fn add(&mut self, kind: crate::location::LocationKind, count: i64) {
        use crate::location::LocationKind;
        match kind {
            LocationKind::Continent => self.continents += count,
            LocationKind::Country => self.countries += count,
            LocationKind::City => self.cities += count,
        }
    }
}

/// Aggregate badge statistics for one user.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BadgeSummary {
    pub total_badges: i64,
    pub by_tier: TierCounts,
    pub by_kind: KindCounts,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- compute_progress -----------------------------------------------------

    #[test]
    fn zero_total_reports_zero_and_no_tier() {
        let p = compute_progress(0, 0);
        assert_eq!(p.percent, 0);
        assert_eq!(p.current_tier, BadgeTier::None);
        assert_eq!(p.next_tier, Some(BadgeTier::Bronze));
        assert_eq!(p.to_next_percent, 25);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 1/5 = 20.0 exactly: below bronze.
        let p = compute_progress(1, 5);
        assert_eq!(p.percent, 20);
        assert_eq!(p.current_tier, BadgeTier::None);

        // 2/3 = 66.67: floor to 66, still silver, never rounded to 67.
        let p = compute_progress(2, 3);
        assert_eq!(p.percent, 66);
        assert_eq!(p.current_tier, BadgeTier::Silver);
    }

    #[test]
    fn exact_threshold_reaches_the_tier() {
        let p = compute_progress(1, 4);
        assert_eq!(p.percent, 25);
        assert_eq!(p.current_tier, BadgeTier::Bronze);
        assert_eq!(p.next_tier, Some(BadgeTier::Silver));
        assert_eq!(p.to_next_percent, 25);
    }

    #[test]
    fn full_coverage_is_platinum() {
        let p = compute_progress(7, 7);
        assert_eq!(p.percent, 100);
        assert_eq!(p.current_tier, BadgeTier::Platinum);
        assert_eq!(p.next_tier, None);
        assert_eq!(p.to_next_percent, 0);
    }

    #[test]
    fn visited_over_total_clamps_to_100() {
        // Stale denormalized count; must not panic or exceed 100.
        let p = compute_progress(9, 4);
        assert_eq!(p.percent, 100);
        assert_eq!(p.current_tier, BadgeTier::Platinum);
    }

    #[test]
    fn to_next_percent_tracks_the_gap() {
        let p = compute_progress(3, 10); // 30%
        assert_eq!(p.current_tier, BadgeTier::Bronze);
        assert_eq!(p.to_next_percent, 20);

        let p = compute_progress(99, 100); // 99%
        assert_eq!(p.current_tier, BadgeTier::Gold);
        assert_eq!(p.to_next_percent, 1);
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let p = compute_progress(3_000_000, 4_000_000);
        assert_eq!(p.percent, 75);
        assert_eq!(p.current_tier, BadgeTier::Gold);
    }

    // -- TierCounts / KindCounts ---------------------------------------------

    #[test]
    fn tier_counts_accumulate() {
        let mut counts = TierCounts::default();
        counts.add(BadgeTier::Bronze, 3);
        counts.add(BadgeTier::Platinum, 1);
        counts.add(BadgeTier::Bronze, 2);
        assert_eq!(counts.bronze, 5);
        assert_eq!(counts.platinum, 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn tier_counts_ignore_none() {
        let mut counts = TierCounts::default();
        counts.add(BadgeTier::None, 10);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn kind_counts_accumulate() {
        use crate::location::LocationKind;
        let mut counts = KindCounts::default();
        counts.add(LocationKind::City, 4);
        counts.add(LocationKind::Continent, 1);
        assert_eq!(counts.cities, 4);
        assert_eq!(counts.continents, 1);
        assert_eq!(counts.countries, 0);
    }
}
