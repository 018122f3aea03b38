//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the badge engine or the repositories in
//! `wandr_db` and map errors via [`AppError`](crate::error::AppError).

pub mod attractions;
pub mod badges;
pub mod locations;
pub mod progress;
pub mod visits;
