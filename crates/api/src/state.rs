use std::sync::Arc;

use wandr_badges::BadgeEngine;
use wandr_events::EventBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wandr_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The badge progress engine.
    pub engine: BadgeEngine,
    /// Centralized event bus for publishing domain events.
    pub event_bus: Arc<EventBus>,
}
