use serde::{Deserialize, Serialize};

/// Base path of the report service when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8084/api/v1";

/// Path on the hosting server that serves [`AppConfig`] as JSON.
pub const APP_CONFIG_PATH: &str = "/app-config";

/// Runtime configuration handed from the host to the browser app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Trims whitespace and trailing slashes so paths can be appended with `/`.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
