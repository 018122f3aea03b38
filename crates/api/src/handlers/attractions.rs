//! Handlers for attraction reads.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use wandr_core::error::CoreError;
use wandr_core::types::DbId;
use wandr_db::repositories::AttractionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /attractions/{id}
pub async fn get_attraction(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let attraction = AttractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Attraction",
            id,
        })?;
    Ok(Json(DataResponse { data: attraction }))
}
