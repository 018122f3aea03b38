//! Handlers for visit recording and listing.
//!
//! Recording is the only mutating entry point of the service. On
//! success the handler publishes `visit.recorded` / `badge.awarded`
//! events; the out-of-scope push dispatcher and the event log consume
//! them downstream.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use wandr_badges::VisitOutcome;
use wandr_core::error::CoreError;
use wandr_core::query::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use wandr_core::types::DbId;
use wandr_db::repositories::{UserRepo, VisitRepo};
use wandr_events::DomainEvent;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /users/{user_id}/visits`.
#[derive(Debug, serde::Deserialize, Validate)]
pub struct RecordVisitBody {
    #[validate(range(min = 1))]
    pub attraction_id: DbId,
}

/// POST /users/{user_id}/visits
///
/// Record a verified visit. Returns 201 with the visit and any newly
/// earned badges; replaying an already-recorded visit returns 200 with
/// an empty badge list.
pub async fn record_visit(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(body): Json<RecordVisitBody>,
) -> AppResult<impl IntoResponse> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let outcome = state
        .engine
        .record_visit(user_id, body.attraction_id)
        .await?;

    publish_visit_events(&state, user_id, &outcome);

    let status = if outcome.newly_recorded {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: outcome })))
}

/// GET /users/{user_id}/visits
///
/// List a user's visits, newest first.
pub async fn list_visits(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    if !UserRepo::exists(&state.pool, user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let visits = VisitRepo::list_for_user(&state.pool, user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: visits }))
}

/// Publish the event-bus fallout of a recording: one `visit.recorded`
/// when the visit is fresh, one `badge.awarded` per issued badge.
fn publish_visit_events(state: &AppState, user_id: DbId, outcome: &VisitOutcome) {
    if outcome.newly_recorded {
        state.event_bus.publish(
            DomainEvent::new("visit.recorded")
                .with_entity("attraction", outcome.visit.attraction_id)
                .with_user(user_id),
        );
    }

    for awarded in &outcome.new_badges {
        state.event_bus.publish(
            DomainEvent::new("badge.awarded")
                .with_entity("location", awarded.badge.location_id)
                .with_user(user_id)
                .with_payload(serde_json::json!({
                    "tier": awarded.badge.tier,
                    "location_name": awarded.location_name,
                    "location_kind": awarded.location_kind,
                })),
        );
    }
}
