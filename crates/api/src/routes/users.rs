//! Route definitions for user-scoped visit and badge endpoints.
//!
//! Mounted at `/users`.
//!
//! ```text
//! POST   /{user_id}/visits     -> record_visit
//! GET    /{user_id}/visits     -> list_visits
//! GET    /{user_id}/progress   -> get_progress
//! GET    /{user_id}/summary    -> get_summary
//! GET    /{user_id}/badges     -> list_badges
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{badges, progress, visits};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/visits",
            get(visits::list_visits).post(visits::record_visit),
        )
        .route("/{user_id}/progress", get(progress::get_progress))
        .route("/{user_id}/summary", get(progress::get_summary))
        .route("/{user_id}/badges", get(badges::list_badges))
}
