//! # cp-config
//!
//! Layered configuration loading for Coparent using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COPARENT_*` prefix, `__` as separator)
//! 2. Project-level `.coparent/config.toml`
//! 3. User-level `~/.config/coparent/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `COPARENT_API__BASE_URL` -> `api.base_url`,
//! `COPARENT_SESSION__DIR` -> `session.dir`, and so on.
//!
//! ```no_run
//! use cp_config::CoparentConfig;
//!
//! let config = CoparentConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "COPARENT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoparentConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CoparentConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".coparent/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("coparent").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CoparentConfig::default();
        assert!(config.api.validate().is_ok());
        assert_eq!(config.api.base_url(), DEFAULT_BASE_URL);
        assert!(config.session.dir.is_empty());
        assert_eq!(config.general.default_format, "table");
    }
}
