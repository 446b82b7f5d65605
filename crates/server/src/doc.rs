use crate::dtos::{
    data::{DataItem, DataResponse},
    greeting::GreetingResponse,
    health::HealthResponse,
};
use crate::routes::{data, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(root::root, health::health, data::get_data),
    components(schemas(GreetingResponse, HealthResponse, DataItem, DataResponse)),
    tags(
        (name = "Greeting", description = "Greeting with host details"),
        (name = "Health", description = "Liveness probe"),
        (name = "Data", description = "Sample data listing"),
    ),
    info(
        title = "Workshop API",
        version = "1.0.0",
        description = "Demo container service",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort_unstable();

        assert_eq!(paths, ["/", "/api/data", "/health"]);
    }

    #[test]
    fn registers_response_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        for name in ["GreetingResponse", "HealthResponse", "DataItem", "DataResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
