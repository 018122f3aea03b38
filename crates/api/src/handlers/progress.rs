//! Handlers for the badge progress and summary projections.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use wandr_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users/{user_id}/progress
///
/// Per-level badge progress, recomputed from visit facts on every call.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let progress = state.engine.progress(user_id).await?;
    Ok(Json(DataResponse { data: progress }))
}

/// GET /users/{user_id}/summary
///
/// Aggregate badge statistics: totals by tier and by location kind.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let summary = state.engine.summary(user_id).await?;
    Ok(Json(DataResponse { data: summary }))
}
