//! Schedule HTTP handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::api::{CreateScheduleRequest, ScheduleResponse};
use crate::handlers::{parse_id_param, problem_details};
use crate::server::AppState;

/// POST /schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    body: Result<Json<CreateScheduleRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return problem_details::bad_request("invalid request body").into_response();
    };

    let schedule = state.store.create_schedule(req.owner_name).await;

    (StatusCode::CREATED, Json(ScheduleResponse::from(&schedule))).into_response()
}

/// GET /schedules/{schedule_id}
pub async fn schedule_details(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
) -> Response {
    let Some(schedule_id) = parse_id_param(&schedule_id) else {
        return problem_details::bad_request("invalid schedule ID").into_response();
    };

    match state.store.get_schedule(schedule_id).await {
        Ok(schedule) => (StatusCode::OK, Json(ScheduleResponse::from(&schedule))).into_response(),
        Err(e) => {
            debug!(schedule_id, "Schedule lookup failed");
            problem_details::not_found(e.to_string()).into_response()
        }
    }
}

/// DELETE /schedules/{schedule_id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
) -> Response {
    let Some(schedule_id) = parse_id_param(&schedule_id) else {
        return problem_details::bad_request("invalid schedule ID").into_response();
    };

    match state.store.delete_schedule(schedule_id).await {
        Ok(schedule) => (StatusCode::OK, Json(ScheduleResponse::from(&schedule))).into_response(),
        Err(e) => {
            debug!(schedule_id, "Schedule lookup failed");
            problem_details::not_found(e.to_string()).into_response()
        }
    }
}
