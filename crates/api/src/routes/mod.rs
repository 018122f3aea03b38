pub mod attractions;
pub mod health;
pub mod locations;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/{user_id}/visits            record (POST), list (GET)
/// /users/{user_id}/progress          per-level badge progress
/// /users/{user_id}/summary           aggregate badge statistics
/// /users/{user_id}/badges            award list
///
/// /locations                         list (filter by kind, parent_id)
/// /locations/{id}                    get
/// /locations/{id}/attractions        list a city's attractions
///
/// /attractions/{id}                  get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/locations", locations::router())
        .nest("/attractions", attractions::router())
}
