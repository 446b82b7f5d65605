use serde::Serialize;
use utoipa::ToSchema;

pub const GREETING: &str = "Hello World from Flask!";

#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    /// Hostname of the machine (or container) serving the request
    pub container_id: String,
    /// Value of the `ENV` variable, `production` when unset
    pub environment: String,
}

impl GreetingResponse {
    pub fn new(container_id: String, environment: String) -> Self {
        Self {
            message: GREETING.to_string(),
            container_id,
            environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_fields_in_order() {
        let response = GreetingResponse::new("web-1".into(), "staging".into());

        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Hello World from Flask!","container_id":"web-1","environment":"staging"}"#
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap()["message"],
            json!(GREETING)
        );
    }
}
