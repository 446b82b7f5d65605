use crate::dtos::data::DataResponse;
use axum::{Json, http::StatusCode};

/// Get the fixed sample listing
#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "Sample records", body = DataResponse)
    ),
    tag = "Data"
)]
pub async fn get_data() -> (StatusCode, Json<DataResponse>) {
    (StatusCode::OK, Json(DataResponse::listing()))
}
