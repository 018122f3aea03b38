//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

use wandr_api::config::ServerConfig;
use wandr_api::router::build_app_router;
use wandr_api::state::AppState;
use wandr_badges::BadgeEngine;
use wandr_core::location::LocationKind;
use wandr_core::types::DbId;
use wandr_db::models::attraction::CreateAttraction;
use wandr_db::models::location::CreateLocation;
use wandr_db::models::user::CreateUser;
use wandr_db::repositories::{AttractionRepo, LocationRepo, UserRepo};
use wandr_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the dev CORS origins (matching the defaults) and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![
            "http://localhost:5173".to_string(),
            "http://localhost:8081".to_string(),
        ],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        engine: BadgeEngine::new(pool),
        event_bus: Arc::new(EventBus::default()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body in one step.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user.
pub async fn seed_user(pool: &PgPool, name: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            display_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        },
    )
    .await
    .unwrap()
}

/// Create a continent -> country -> city branch with `n` attractions.
/// Returns (continent, country, city, attraction ids).
pub async fn seed_branch(
    pool: &PgPool,
    names: (&str, &str, &str),
    n: usize,
) -> (DbId, DbId, DbId, Vec<DbId>) {
    let continent = LocationRepo::create(
        pool,
        &CreateLocation {
            kind: LocationKind::Continent,
            name: names.0.to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();
    let country = LocationRepo::create(
        pool,
        &CreateLocation {
            kind: LocationKind::Country,
            name: names.1.to_string(),
            parent_id: Some(continent),
        },
    )
    .await
    .unwrap();
    let city = LocationRepo::create(
        pool,
        &CreateLocation {
            kind: LocationKind::City,
            name: names.2.to_string(),
            parent_id: Some(country),
        },
    )
    .await
    .unwrap();

    let mut attractions = Vec::with_capacity(n);
    for i in 0..n {
        attractions.push(
            AttractionRepo::create(
                pool,
                &CreateAttraction {
                    city_id: city,
                    name: format!("{} sight {i}", names.2),
                    category: None,
                    description: None,
                },
            )
            .await
            .unwrap(),
        );
    }
    (continent, country, city, attractions)
}
