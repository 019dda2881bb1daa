//! Appointment HTTP handlers.
//!
//! Creation goes through the admission engine, which rejects invalid ranges
//! and overlaps with 422 while an unknown schedule stays a 404.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::api::{AppointmentResponse, CreateAppointmentRequest};
use crate::handlers::{parse_id_param, problem_details};
use crate::scheduler::SchedulerError;
use crate::server::AppState;

/// POST /schedules/{schedule_id}/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
    body: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Response {
    let Some(schedule_id) = parse_id_param(&schedule_id) else {
        return problem_details::bad_request("invalid schedule ID").into_response();
    };
    let Ok(Json(req)) = body else {
        return problem_details::bad_request("invalid request body").into_response();
    };

    match state
        .store
        .admit_appointment(schedule_id, req.start_time, req.end_time)
        .await
    {
        Ok(appointment) => (
            StatusCode::CREATED,
            Json(AppointmentResponse::from(appointment)),
        )
            .into_response(),
        Err(e @ SchedulerError::ScheduleNotFound(_)) => {
            problem_details::not_found(e.to_string()).into_response()
        }
        Err(e) => {
            debug!(
                schedule_id,
                start = req.start_time,
                end = req.end_time,
                error = %e,
                "Rejected appointment"
            );
            problem_details::unprocessable_entity(e.to_string()).into_response()
        }
    }
}

/// GET /schedules/{schedule_id}/appointments/{appointment_id}
pub async fn appointment_details(
    State(state): State<AppState>,
    Path((schedule_id, appointment_id)): Path<(String, String)>,
) -> Response {
    let Some((schedule_id, appointment_id)) = parse_id_pair(&schedule_id, &appointment_id) else {
        return problem_details::bad_request("invalid appointment ID").into_response();
    };

    match state.store.get_appointment(schedule_id, appointment_id).await {
        Ok(appointment) => {
            (StatusCode::OK, Json(AppointmentResponse::from(appointment))).into_response()
        }
        Err(e) => problem_details::not_found(e.to_string()).into_response(),
    }
}

/// DELETE /schedules/{schedule_id}/appointments/{appointment_id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path((schedule_id, appointment_id)): Path<(String, String)>,
) -> Response {
    let Some((schedule_id, appointment_id)) = parse_id_pair(&schedule_id, &appointment_id) else {
        return problem_details::bad_request("invalid appointment ID").into_response();
    };

    match state
        .store
        .delete_appointment(schedule_id, appointment_id)
        .await
    {
        Ok(appointment) => {
            (StatusCode::OK, Json(AppointmentResponse::from(appointment))).into_response()
        }
        Err(e) => {
            debug!(schedule_id, appointment_id, "Appointment lookup failed");
            problem_details::not_found(e.to_string()).into_response()
        }
    }
}

fn parse_id_pair(schedule_id: &str, appointment_id: &str) -> Option<(u64, u64)> {
    Some((parse_id_param(schedule_id)?, parse_id_param(appointment_id)?))
}
