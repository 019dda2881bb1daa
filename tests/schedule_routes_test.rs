//! Integration tests for the schedule routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};

mod common;

use common::{body_json, create_schedule, send, test_app};

// ============================================================================
// Health and Version Endpoints
// ============================================================================

#[tokio::test]
async fn test_livez() {
    let app = test_app();

    let response = send(&app, Request::get("/livez").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readyz() {
    let app = test_app();

    let response = send(&app, Request::get("/readyz").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_version() {
    let app = test_app();

    let response = send(&app, Request::get("/version").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json.get("version").is_some());
}

// ============================================================================
// POST /schedules
// ============================================================================

#[tokio::test]
async fn test_create_schedule_returns_created_entity() {
    let app = test_app();

    let json = create_schedule(&app, "Tyrion Lannister").await;

    assert_eq!(json["id"], 1);
    assert_eq!(json["owner_name"], "Tyrion Lannister");
    assert_eq!(json["appointments"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_schedule_increments_ids() {
    let app = test_app();

    let first = create_schedule(&app, "first").await;
    let second = create_schedule(&app, "second").await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn test_create_schedule_invalid_body() {
    let app = test_app();

    let response = send(
        &app,
        Request::post("/schedules")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_create_schedule_missing_owner_name() {
    let app = test_app();

    let response = send(
        &app,
        Request::post("/schedules")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// GET /schedules/{id}
// ============================================================================

#[tokio::test]
async fn test_schedule_details() {
    let app = test_app();
    create_schedule(&app, "Arya Stark").await;

    let response = send(
        &app,
        Request::get("/schedules/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["owner_name"], "Arya Stark");
    assert_eq!(json["appointments"], serde_json::json!([]));
}

#[tokio::test]
async fn test_schedule_details_non_numeric_id() {
    let app = test_app();

    let response = send(
        &app,
        Request::get("/schedules/abc").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert!(json["detail"].as_str().unwrap().contains("schedule ID"));
}

#[tokio::test]
async fn test_schedule_details_not_found() {
    let app = test_app();

    let response = send(
        &app,
        Request::get("/schedules/99").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert!(json["detail"].as_str().unwrap().contains("not found"));
}

// ============================================================================
// DELETE /schedules/{id}
// ============================================================================

#[tokio::test]
async fn test_delete_schedule_returns_deleted_entity() {
    let app = test_app();
    create_schedule(&app, "Sansa Stark").await;

    let response = send(
        &app,
        Request::delete("/schedules/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["owner_name"], "Sansa Stark");

    // Gone afterwards.
    let response = send(
        &app,
        Request::get("/schedules/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_schedule_non_numeric_id() {
    let app = test_app();

    let response = send(
        &app,
        Request::delete("/schedules/abc")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_schedule_not_found() {
    let app = test_app();

    let response = send(
        &app,
        Request::delete("/schedules/99").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_schedule_id_is_not_reused() {
    let app = test_app();
    create_schedule(&app, "first").await;

    let response = send(
        &app,
        Request::delete("/schedules/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = create_schedule(&app, "second").await;
    assert_eq!(json["id"], 2);
}

// ============================================================================
// Error Responses
// ============================================================================

#[tokio::test]
async fn test_problem_details_format() {
    let app = test_app();

    let response = send(
        &app,
        Request::get("/schedules/99").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/problem+json"
    );

    let json = body_json(response).await;
    assert!(json.get("type").is_some());
    assert!(json.get("title").is_some());
    assert!(json.get("status").is_some());
}
