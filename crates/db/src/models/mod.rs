//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where callers supply fields
//!
//! Enum-typed columns (`locations.kind`, `user_badges.tier`) are stored
//! as strings and surfaced through accessor methods returning the closed
//! `wandr_core` enums.

pub mod attraction;
pub mod event;
pub mod location;
pub mod user;
pub mod user_badge;
pub mod visit;
