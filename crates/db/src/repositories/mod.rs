//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attraction_repo;
pub mod event_repo;
pub mod location_repo;
pub mod user_badge_repo;
pub mod user_repo;
pub mod visit_repo;

pub use attraction_repo::AttractionRepo;
pub use event_repo::EventRepo;
pub use location_repo::LocationRepo;
pub use user_badge_repo::UserBadgeRepo;
pub use user_repo::UserRepo;
pub use visit_repo::VisitRepo;
