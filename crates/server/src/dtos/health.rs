use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self { status: "healthy" }
    }
}
