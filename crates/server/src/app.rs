use crate::routes::{data, health, root};
use crate::utils::request_log::log_requests;
use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

/// All interfaces, fixed port
pub const BIND_ADDR: &str = "0.0.0.0:5000";

pub const PATH_ROOT: &str = "/";
pub const PATH_HEALTH: &str = "/health";
pub const PATH_DATA: &str = "/api/data";

/// Builds the service router.
///
/// Paths other than the three below fall through to axum's 404, and other
/// methods on them get its 405.
pub fn app() -> Router {
    let router = Router::new()
        .route(PATH_ROOT, get(root::root))
        .route(PATH_HEALTH, get(health::health))
        .route(PATH_DATA, get(data::get_data));

    #[cfg(feature = "swagger")]
    let router = {
        use crate::doc::ApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    };

    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_requests))
            .layer(CompressionLayer::new()),
    )
}
