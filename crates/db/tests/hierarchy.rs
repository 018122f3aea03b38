//! Integration tests for the location hierarchy: ancestor resolution
//! and the denormalized attraction counters.

use sqlx::PgPool;
use wandr_core::location::LocationKind;
use wandr_core::types::DbId;
use wandr_db::models::attraction::CreateAttraction;
use wandr_db::models::location::CreateLocation;
use wandr_db::repositories::{AttractionRepo, LocationRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn node(kind: LocationKind, name: &str, parent_id: Option<DbId>) -> CreateLocation {
    CreateLocation {
        kind,
        name: name.to_string(),
        parent_id,
    }
}

fn sight(city_id: DbId, name: &str) -> CreateAttraction {
    CreateAttraction {
        city_id,
        name: name.to_string(),
        category: Some("landmark".to_string()),
        description: None,
    }
}

/// Create a continent -> country -> city branch, returning the ids.
async fn branch(pool: &PgPool, names: (&str, &str, &str)) -> (DbId, DbId, DbId) {
    let continent = LocationRepo::create(pool, &node(LocationKind::Continent, names.0, None))
        .await
        .unwrap();
    let country =
        LocationRepo::create(pool, &node(LocationKind::Country, names.1, Some(continent)))
            .await
            .unwrap();
    let city = LocationRepo::create(pool, &node(LocationKind::City, names.2, Some(country)))
        .await
        .unwrap();
    (continent, country, city)
}

// ---------------------------------------------------------------------------
// Ancestor resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ancestors_resolve_full_chain(pool: PgPool) {
    let (continent, country, city) = branch(&pool, ("Europe", "France", "Paris")).await;
    let attraction = AttractionRepo::create(&pool, &sight(city, "Eiffel Tower"))
        .await
        .unwrap();

    let chain = LocationRepo::ancestors_of_attraction(&pool, attraction)
        .await
        .unwrap()
        .expect("chain should resolve");

    assert_eq!(chain.city.id, city);
    assert_eq!(chain.city.name, "Paris");
    assert_eq!(chain.city.kind, LocationKind::City);
    assert_eq!(chain.country.id, country);
    assert_eq!(chain.country.name, "France");
    assert_eq!(chain.continent.id, continent);
    assert_eq!(chain.continent.name, "Europe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ancestors_of_unknown_attraction_is_none(pool: PgPool) {
    let chain = LocationRepo::ancestors_of_attraction(&pool, 999_999)
        .await
        .unwrap();
    assert!(chain.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn chain_nodes_walk_leaf_first(pool: PgPool) {
    let (_, _, city) = branch(&pool, ("Asia", "Japan", "Tokyo")).await;
    let attraction = AttractionRepo::create(&pool, &sight(city, "Senso-ji"))
        .await
        .unwrap();

    let chain = LocationRepo::ancestors_of_attraction(&pool, attraction)
        .await
        .unwrap()
        .unwrap();

    let kinds: Vec<LocationKind> = chain.nodes().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![LocationKind::City, LocationKind::Country, LocationKind::Continent]
    );
}

// ---------------------------------------------------------------------------
// Denormalized counters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_attractions_bumps_the_whole_chain(pool: PgPool) {
    let (continent, country, city) = branch(&pool, ("Europe", "Italy", "Rome")).await;

    AttractionRepo::create(&pool, &sight(city, "Colosseum")).await.unwrap();
    AttractionRepo::create(&pool, &sight(city, "Pantheon")).await.unwrap();

    for id in [city, country, continent] {
        let location = LocationRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(location.total_attractions, 2, "node {id} should count 2");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn counters_are_per_branch(pool: PgPool) {
    let (continent, _, rome) = branch(&pool, ("Europe", "Italy", "Rome")).await;
    let france = LocationRepo::create(
        &pool,
        &node(LocationKind::Country, "France", Some(continent)),
    )
    .await
    .unwrap();
    let paris = LocationRepo::create(&pool, &node(LocationKind::City, "Paris", Some(france)))
        .await
        .unwrap();

    AttractionRepo::create(&pool, &sight(rome, "Colosseum")).await.unwrap();
    AttractionRepo::create(&pool, &sight(paris, "Louvre")).await.unwrap();
    AttractionRepo::create(&pool, &sight(paris, "Eiffel Tower")).await.unwrap();

    let paris_row = LocationRepo::find_by_id(&pool, paris).await.unwrap().unwrap();
    let rome_row = LocationRepo::find_by_id(&pool, rome).await.unwrap().unwrap();
    let continent_row = LocationRepo::find_by_id(&pool, continent).await.unwrap().unwrap();

    assert_eq!(paris_row.total_attractions, 2);
    assert_eq!(rome_row.total_attractions, 1);
    assert_eq!(continent_row.total_attractions, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_an_attraction_decrements_the_chain(pool: PgPool) {
    let (continent, _, city) = branch(&pool, ("Africa", "Egypt", "Giza")).await;
    let keep = AttractionRepo::create(&pool, &sight(city, "Great Pyramid")).await.unwrap();
    let gone = AttractionRepo::create(&pool, &sight(city, "Sphinx")).await.unwrap();

    let deleted = AttractionRepo::delete(&pool, gone).await.unwrap();
    assert!(deleted);

    let continent_row = LocationRepo::find_by_id(&pool, continent).await.unwrap().unwrap();
    assert_eq!(continent_row.total_attractions, 1);

    let remaining = AttractionRepo::find_by_id(&pool, keep).await.unwrap();
    assert!(remaining.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_unknown_attraction_returns_false(pool: PgPool) {
    let deleted = AttractionRepo::delete(&pool, 424_242).await.unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Structural constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn continent_with_parent_is_rejected(pool: PgPool) {
    let (continent, _, _) = branch(&pool, ("Europe", "Spain", "Madrid")).await;

    let result = LocationRepo::create(
        &pool,
        &node(LocationKind::Continent, "Atlantis", Some(continent)),
    )
    .await;
    assert!(result.is_err(), "continents must be roots");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn city_without_parent_is_rejected(pool: PgPool) {
    let result = LocationRepo::create(&pool, &node(LocationKind::City, "Nowhere", None)).await;
    assert!(result.is_err(), "cities must have a parent");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_sibling_name_is_rejected(pool: PgPool) {
    let (_, country, _) = branch(&pool, ("Europe", "Germany", "Berlin")).await;

    let result =
        LocationRepo::create(&pool, &node(LocationKind::City, "Berlin", Some(country))).await;
    assert!(result.is_err(), "sibling names must be unique");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_kind_and_parent(pool: PgPool) {
    let (continent, country, _) = branch(&pool, ("Europe", "Portugal", "Lisbon")).await;
    LocationRepo::create(&pool, &node(LocationKind::City, "Porto", Some(country)))
        .await
        .unwrap();

    let cities = LocationRepo::list(&pool, Some(LocationKind::City), Some(country), 50, 0)
        .await
        .unwrap();
    assert_eq!(cities.len(), 2);
    // Ordered by name.
    assert_eq!(cities[0].name, "Lisbon");
    assert_eq!(cities[1].name, "Porto");

    let continents = LocationRepo::list(&pool, Some(LocationKind::Continent), None, 50, 0)
        .await
        .unwrap();
    assert_eq!(continents.len(), 1);
    assert_eq!(continents[0].id, continent);
}
