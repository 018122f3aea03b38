//! Wandr event bus and event-log infrastructure.
//!
//! Building blocks for the service-wide event flow:
//!
//! - [`EventBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`] -- the canonical event envelope
//!   (`visit.recorded`, `badge.awarded`).
//! - [`EventPersistence`] -- background service that durably writes every
//!   event to the `events` table, where the (out-of-scope) push
//!   notification dispatcher picks them up.

pub mod bus;
pub mod persistence;

pub use bus::{DomainEvent, EventBus};
pub use persistence::EventPersistence;
