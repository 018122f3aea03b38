//! Handlers for badge award listings.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use wandr_core::query::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use wandr_core::types::DbId;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users/{user_id}/badges
///
/// List a user's badge awards, newest first.
pub async fn list_badges(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let badges = state.engine.badges(user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: badges }))
}
