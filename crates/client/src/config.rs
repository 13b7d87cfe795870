//! Client configuration loaded from environment variables.

use std::time::Duration;

/// Base URL used when `API_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:4567/api/";

/// Request timeout used when `API_TIMEOUT_SECS` is not set.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment configuration for the REST API clients.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base API URL, always ending in a slash so endpoint paths can be
    /// appended directly (default: `http://localhost:4567/api/`).
    pub base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                      |
    /// |--------------------|------------------------------|
    /// | `API_BASE_URL`     | `http://localhost:4567/api/` |
    /// | `API_TIMEOUT_SECS` | `30`                         |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let request_timeout_secs: u64 = std::env::var("API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("API_TIMEOUT_SECS must be a valid u64");

        Self::new(base_url, request_timeout_secs)
    }

    /// Build a config from explicit values, normalizing the base URL
    /// to end in a slash.
    pub fn new(base_url: impl Into<String>, request_timeout_secs: u64) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            request_timeout_secs,
        }
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }
}
