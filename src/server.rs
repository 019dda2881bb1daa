use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::scheduler::ScheduleStore;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
///
/// The store is the single owner of all schedules; handlers reach it through
/// clones of this state.
#[derive(Clone)]
pub struct AppState {
    pub store: ScheduleStore,
}

// ============================================================================
// Server Setup
// ============================================================================

pub fn build_app(state: AppState, request_timeout_seconds: u64) -> Router {
    let schedule_routes = Router::new()
        .route("/schedules", post(handlers::create_schedule))
        .route(
            "/schedules/{schedule_id}",
            get(handlers::schedule_details).delete(handlers::delete_schedule),
        )
        .route(
            "/schedules/{schedule_id}/appointments",
            post(handlers::create_appointment),
        )
        .route(
            "/schedules/{schedule_id}/appointments/{appointment_id}",
            get(handlers::appointment_details).delete(handlers::delete_appointment),
        )
        .with_state(state);

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .merge(schedule_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_seconds),
        ))
}
