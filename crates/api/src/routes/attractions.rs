//! Route definitions for attraction reads.
//!
//! Mounted at `/attractions`.
//!
//! ```text
//! GET    /{id}    -> get_attraction
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::attractions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(attractions::get_attraction))
}
