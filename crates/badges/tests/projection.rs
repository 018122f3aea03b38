//! Integration tests for the read-side projections: per-level progress
//! lists and the badge summary.

use sqlx::PgPool;
use wandr_badges::BadgeEngine;
use wandr_core::location::LocationKind;
use wandr_core::tier::BadgeTier;
use wandr_core::types::DbId;
use wandr_db::models::attraction::CreateAttraction;
use wandr_db::models::location::CreateLocation;
use wandr_db::models::user::CreateUser;
use wandr_db::repositories::{AttractionRepo, LocationRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, name: &str) -> DbId {
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

async fn node(
    pool: &PgPool,
    kind: LocationKind,
    name: &str,
    parent_id: Option<DbId>,
) -> DbId {
    LocationRepo::create(
        pool,
        &CreateLocation {
            kind,
            name: name.to_string(),
            parent_id,
        },
    )
    .await
    .unwrap()
}

async fn sights(pool: &PgPool, city: DbId, prefix: &str, n: usize) -> Vec<DbId> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        ids.push(
            AttractionRepo::create(
                pool,
                &CreateAttraction {
                    city_id: city,
                    name: format!("{prefix} {i}"),
                    category: None,
                    description: None,
                },
            )
            .await
            .unwrap(),
        );
    }
    ids
}

// ---------------------------------------------------------------------------
// Progress projection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_covers_all_three_levels(pool: PgPool) {
    let user = new_user(&pool, "Ada").await;
    let europe = node(&pool, LocationKind::Continent, "Europe", None).await;
    let italy = node(&pool, LocationKind::Country, "Italy", Some(europe)).await;
    let rome = node(&pool, LocationKind::City, "Rome", Some(italy)).await;
    let florence = node(&pool, LocationKind::City, "Florence", Some(italy)).await;
    let rome_sights = sights(&pool, rome, "Rome sight", 2).await;
    sights(&pool, florence, "Florence sight", 2).await;

    let engine = BadgeEngine::new(pool.clone());
    engine.record_visit(user, rome_sights[0]).await.unwrap();

    let progress = engine.progress(user).await.unwrap();

    // Cities: only Rome was touched.
    assert_eq!(progress.cities.len(), 1);
    let city = &progress.cities[0];
    assert_eq!(city.name, "Rome");
    assert_eq!(city.kind, LocationKind::City);
    assert_eq!(city.visited_attractions, 1);
    assert_eq!(city.total_attractions, 2);
    assert_eq!(city.progress.percent, 50);
    assert_eq!(city.progress.current_tier, BadgeTier::Silver);
    assert_eq!(city.progress.next_tier, Some(BadgeTier::Gold));
    assert_eq!(city.progress.to_next_percent, 25);

    // Country level: Italy counts all four attractions.
    assert_eq!(progress.countries.len(), 1);
    let country = &progress.countries[0];
    assert_eq!(country.name, "Italy");
    assert_eq!(country.visited_attractions, 1);
    assert_eq!(country.total_attractions, 4);
    assert_eq!(country.progress.percent, 25);
    assert_eq!(country.progress.current_tier, BadgeTier::Bronze);

    // Continent level mirrors the country here.
    assert_eq!(progress.continents.len(), 1);
    assert_eq!(progress.continents[0].name, "Europe");
    assert_eq!(progress.continents[0].progress.percent, 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_is_empty_for_a_user_with_no_visits(pool: PgPool) {
    let user = new_user(&pool, "Ada").await;
    let engine = BadgeEngine::new(pool.clone());

    let progress = engine.progress(user).await.unwrap();
    assert!(progress.continents.is_empty());
    assert!(progress.countries.is_empty());
    assert!(progress.cities.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_for_unknown_user_is_not_found(pool: PgPool) {
    let engine = BadgeEngine::new(pool.clone());
    let result = engine.progress(404).await;
    assert!(matches!(
        result,
        Err(wandr_badges::EngineError::Core(
            wandr_core::error::CoreError::NotFound { entity: "User", .. }
        ))
    ));
}

// ---------------------------------------------------------------------------
// Summary projection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_groups_by_tier_and_kind(pool: PgPool) {
    let user = new_user(&pool, "Ada").await;
    let europe = node(&pool, LocationKind::Continent, "Europe", None).await;
    let italy = node(&pool, LocationKind::Country, "Italy", Some(europe)).await;
    let rome = node(&pool, LocationKind::City, "Rome", Some(italy)).await;
    let milan = node(&pool, LocationKind::City, "Milan", Some(italy)).await;
    let rome_sights = sights(&pool, rome, "Rome sight", 1).await;
    sights(&pool, milan, "Milan sight", 3).await;

    let engine = BadgeEngine::new(pool.clone());
    // Rome: 1/1 -> all four city tiers. Italy/Europe: 1/4 -> bronze each.
    engine.record_visit(user, rome_sights[0]).await.unwrap();

    let summary = engine.summary(user).await.unwrap();
    assert_eq!(summary.total_badges, 6);
    assert_eq!(summary.by_tier.bronze, 3);
    assert_eq!(summary.by_tier.silver, 1);
    assert_eq!(summary.by_tier.gold, 1);
    assert_eq!(summary.by_tier.platinum, 1);
    assert_eq!(summary.by_tier.total(), summary.total_badges);
    assert_eq!(summary.by_kind.cities, 4);
    assert_eq!(summary.by_kind.countries, 1);
    assert_eq!(summary.by_kind.continents, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_is_zero_for_a_fresh_user(pool: PgPool) {
    let user = new_user(&pool, "Ada").await;
    let engine = BadgeEngine::new(pool.clone());

    let summary = engine.summary(user).await.unwrap();
    assert_eq!(summary.total_badges, 0);
    assert_eq!(summary.by_tier, Default::default());
    assert_eq!(summary.by_kind, Default::default());
}

// ---------------------------------------------------------------------------
// Badge listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn badge_list_is_paginated(pool: PgPool) {
    let user = new_user(&pool, "Ada").await;
    let europe = node(&pool, LocationKind::Continent, "Europe", None).await;
    let italy = node(&pool, LocationKind::Country, "Italy", Some(europe)).await;
    let rome = node(&pool, LocationKind::City, "Rome", Some(italy)).await;
    let rome_sights = sights(&pool, rome, "Rome sight", 1).await;

    let engine = BadgeEngine::new(pool.clone());
    engine.record_visit(user, rome_sights[0]).await.unwrap();

    // 12 badges total (3 nodes x 4 tiers).
    let first = engine.badges(user, 10, 0).await.unwrap();
    let rest = engine.badges(user, 10, 10).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(rest.len(), 2);
}
