//! Endpoint paths and environment keys for the inspection API

/// Create endpoint, relative to the base URL
pub const CREATE_ENDPOINT: &str = "api/inspection/create";

/// List endpoint, relative to the base URL
pub const LIST_ENDPOINT: &str = "api/inspection";

/// Environment variables checked for the base URL, first match wins
pub const API_URL_ENV_VARS: &[&str] = &["CARHUB_API_URL", "REACT_APP_API_URL", "VITE_API_URL"];

pub const USER_AGENT: &str = concat!("carhub-cli/", env!("CARGO_PKG_VERSION"));

/// Standard headers for inspection requests
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Join a base URL and a relative endpoint with exactly one `/`
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}
