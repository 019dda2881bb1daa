use axum::http::StatusCode;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn readyz() -> (StatusCode, &'static str) {
    // The store is in-memory and ready as soon as the process serves.
    (StatusCode::OK, "ok")
}
