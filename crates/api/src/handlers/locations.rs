//! Handlers for browsing the location hierarchy.
//!
//! These power the consumer app's continent -> country -> city
//! drill-down. The hierarchy itself is maintained by the location data
//! pipeline, not through this API.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use wandr_core::error::CoreError;
use wandr_core::location::LocationKind;
use wandr_core::query::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use wandr_core::types::DbId;
use wandr_db::repositories::{AttractionRepo, LocationRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /locations`.
#[derive(Debug, serde::Deserialize)]
pub struct ListLocationsParams {
    /// Optional kind filter (`continent`, `country`, `city`).
    pub kind: Option<String>,
    /// Optional parent filter for drilling into one branch.
    pub parent_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /locations
///
/// List location nodes, optionally filtered by kind and/or parent.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<ListLocationsParams>,
) -> AppResult<impl IntoResponse> {
    let kind = params
        .kind
        .as_deref()
        .map(LocationKind::from_str_value)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let locations = LocationRepo::list(&state.pool, kind, params.parent_id, limit, offset).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// GET /locations/{id}
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Location",
            id,
        })?;
    Ok(Json(DataResponse { data: location }))
}

/// GET /locations/{id}/attractions
///
/// List the attractions of a city.
pub async fn list_city_attractions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<crate::query::PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Location",
            id,
        })?;

    let kind = location
        .kind()
        .map_err(CoreError::Internal)
        .map_err(AppError::Core)?;
    if kind != LocationKind::City {
        return Err(AppError::BadRequest(format!(
            "Location {id} is a {}, only cities have attractions",
            kind.as_str()
        )));
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let attractions = AttractionRepo::list_by_city(&state.pool, id, limit, offset).await?;
    Ok(Json(DataResponse { data: attractions }))
}
