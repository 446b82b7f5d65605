use crate::dtos::greeting::GreetingResponse;
use crate::utils::host;
use axum::{Json, http::StatusCode};

/// Greets the caller and reports which host and environment answered
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting with host details", body = GreetingResponse)
    ),
    tag = "Greeting"
)]
pub async fn root() -> (StatusCode, Json<GreetingResponse>) {
    let response = GreetingResponse::new(host::container_id(), host::environment());

    (StatusCode::OK, Json(response))
}
