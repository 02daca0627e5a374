use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

// GET /health (no toca la base de datos)
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
