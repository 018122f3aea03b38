//! Badge tier ladder and threshold rules.
//!
//! A user's tier at a location is determined solely by the percentage of
//! that location's attractions they have visited. Thresholds are
//! inclusive lower bounds; a node's tier is the highest tier whose
//! threshold is met. The ladder is strictly increasing and a single
//! visit may cross several rungs at once.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Tier strings as stored in the `user_badges.tier` column.
pub const TIER_NONE: &str = "none";
pub const TIER_BRONZE: &str = "bronze";
pub const TIER_SILVER: &str = "silver";
pub const TIER_GOLD: &str = "gold";
pub const TIER_PLATINUM: &str = "platinum";

/// All valid tier strings, lowest first.
pub const VALID_TIERS: &[&str] = &[TIER_NONE, TIER_BRONZE, TIER_SILVER, TIER_GOLD, TIER_PLATINUM];

// ---------------------------------------------------------------------------
// BadgeTier
// ---------------------------------------------------------------------------

/// A rung on the badge ladder.
///
/// `None` means "below bronze" and is never persisted; only
/// `Bronze..=Platinum` become `user_badges` rows. The derived `Ord`
/// follows declaration order, so tier comparisons read naturally
/// (`BadgeTier::Silver < BadgeTier::Gold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    /// Every tier, lowest first.
    pub const ALL: [BadgeTier; 5] = [
        Self::None,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
    ];

    /// The tiers that can be awarded as badges, lowest first.
    pub const AWARDABLE: [BadgeTier; 4] =
        [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum];

    /// Inclusive percentage threshold for reaching this tier.
    pub fn threshold(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bronze => 25,
            Self::Silver => 50,
            Self::Gold => 75,
            Self::Platinum => 100,
        }
    }

    /// The highest tier whose threshold the given percentage meets.
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            100.. => Self::Platinum,
            75..=99 => Self::Gold,
            50..=74 => Self::Silver,
            25..=49 => Self::Bronze,
            _ => Self::None,
        }
    }

    /// The tier immediately above this one, or `None` at the top.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::Bronze),
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            TIER_NONE => Ok(Self::None),
            TIER_BRONZE => Ok(Self::Bronze),
            TIER_SILVER => Ok(Self::Silver),
            TIER_GOLD => Ok(Self::Gold),
            TIER_PLATINUM => Ok(Self::Platinum),
            _ => Err(format!(
                "Invalid badge tier '{s}'. Must be one of: {}",
                VALID_TIERS.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => TIER_NONE,
            Self::Bronze => TIER_BRONZE,
            Self::Silver => TIER_SILVER,
            Self::Gold => TIER_GOLD,
            Self::Platinum => TIER_PLATINUM,
        }
    }
}

// ---------------------------------------------------------------------------
// Ladder traversal
// ---------------------------------------------------------------------------

/// All tiers strictly above `prior` up to and including `current`,
/// lowest first.
///
/// This is the set of badges a recomputation must issue: each crossed
/// rung is a distinct, collectible badge, so a jump from 0% straight to
/// 100% yields bronze, silver, gold and platinum in that order. Returns
/// an empty vec when `current <= prior`.
pub fn tiers_between(prior: BadgeTier, current: BadgeTier) -> Vec<BadgeTier> {
    BadgeTier::AWARDABLE
        .into_iter()
        .filter(|t| *t > prior && *t <= current)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
