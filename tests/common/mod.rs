//! Common test utilities.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use slotbook::scheduler::ScheduleStore;
use slotbook::server::{self, AppState};

/// Create a test app with a fresh, empty store.
pub fn test_app() -> Router {
    let state = AppState {
        store: ScheduleStore::new(),
    };
    server::build_app(state, 60)
}

/// Send a request to the app and return the response.
pub async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// POST a schedule for `owner_name` and return its JSON, asserting 201.
pub async fn create_schedule(app: &Router, owner_name: &str) -> serde_json::Value {
    let response = send(
        app,
        Request::post("/schedules")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"owner_name": "{owner_name}"}}"#)))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// POST an appointment to a schedule and return the raw response.
pub async fn post_appointment(
    app: &Router,
    schedule_id: u64,
    start: i64,
    end: i64,
) -> Response<axum::body::Body> {
    send(
        app,
        Request::post(format!("/schedules/{schedule_id}/appointments"))
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"start_time": {start}, "end_time": {end}}}"#
            )))
            .unwrap(),
    )
    .await
}
