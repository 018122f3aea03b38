//! Wandr core domain logic.
//!
//! This crate contains the pure, database-free pieces of the badge
//! progress system: the tier ladder and its thresholds, the location
//! hierarchy vocabulary, and the progress calculator. Everything here
//! operates on pre-loaded data passed in by the caller; persistence and
//! aggregation live in `wandr-db` and `wandr-badges`.

pub mod error;
pub mod location;
pub mod progress;
pub mod query;
pub mod tier;
pub mod types;
