use crate::dtos::health::HealthResponse;
use axum::{Json, http::StatusCode};

/// Simple endpoint that reports healthy when the service is running properly
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
