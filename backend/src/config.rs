//! # Host Configuration
//!
//! Settings of the local host process, read once at startup from the
//! environment:
//!
//! | Variable                  | Default                        |
//! |---------------------------|--------------------------------|
//! | `REPORTDESK_HOST`         | `127.0.0.1`                    |
//! | `REPORTDESK_PORT`         | `8080`                         |
//! | `REPORTDESK_API_BASE_URL` | `http://localhost:8084/api/v1` |
//! | `REPORTDESK_OPEN_BROWSER` | `true`                         |
//!
//! Blank values count as unset. The API base URL is not used by the host
//! itself; it is handed to the browser app through `GET /app-config`.

use common::config::{normalize_base_url, AppConfig, DEFAULT_API_BASE_URL};
use thiserror::Error;

pub const HOST_VAR: &str = "REPORTDESK_HOST";
pub const PORT_VAR: &str = "REPORTDESK_PORT";
pub const API_BASE_URL_VAR: &str = "REPORTDESK_API_BASE_URL";
pub const OPEN_BROWSER_VAR: &str = "REPORTDESK_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("REPORTDESK_PORT must be a port number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("REPORTDESK_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match value(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match value(OPEN_BROWSER_VAR) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => true,
        };

        Ok(Self {
            host: value(HOST_VAR)
                .map(|h| h.trim().to_string())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_base_url: normalize_base_url(
                &value(API_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the configuration the browser app is allowed to see.
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(self.api_base_url.clone())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_are_read_and_normalized() {
        let config = config(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (API_BASE_URL_VAR, "https://reports.internal/api/v1/"),
            (OPEN_BROWSER_VAR, "off"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base_url, "https://reports.internal/api/v1");
        assert!(!config.open_browser);
        assert_eq!(
            config.app_config().api_base_url,
            "https://reports.internal/api/v1"
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[(PORT_VAR, "  "), (HOST_VAR, "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn invalid_port_is_rejected() {
        for raw in ["http", "0", "70000", "-1"] {
            assert_eq!(
                config(&[(PORT_VAR, raw)]),
                Err(ConfigError::InvalidPort(raw.to_string()))
            );
        }
    }

    #[test]
    fn invalid_flag_is_rejected() {
        assert_eq!(
            config(&[(OPEN_BROWSER_VAR, "maybe")]),
            Err(ConfigError::InvalidFlag("maybe".to_string()))
        );
    }
}
