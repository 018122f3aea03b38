//! Route definitions for the location hierarchy browse endpoints.
//!
//! Mounted at `/locations`.
//!
//! ```text
//! GET    /                    -> list_locations (?kind=&parent_id=)
//! GET    /{id}                -> get_location
//! GET    /{id}/attractions    -> list_city_attractions
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(locations::list_locations))
        .route("/{id}", get(locations::get_location))
        .route("/{id}/attractions", get(locations::list_city_attractions))
}
