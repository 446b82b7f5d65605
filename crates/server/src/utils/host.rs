use std::env;

/// Variable naming the deployment environment
pub const ENV_VAR: &str = "ENV";
pub const DEFAULT_ENVIRONMENT: &str = "production";
const UNKNOWN_HOST: &str = "unknown";

/// Hostname of the machine serving the request.
///
/// Inside a container this is the container id. Never empty: falls back to
/// `unknown` when the name cannot be read or is not valid UTF-8.
pub fn container_id() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

/// Current value of `ENV`, read on every call
pub fn environment() -> String {
    env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}
