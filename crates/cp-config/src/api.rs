//! Remote API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (e.g. `https://coparent.example/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Check that the base URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or non-http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            }),
        }
    }
}
