//! # cw-config
//!
//! Layered configuration loading for Cosmic Watch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COSMIC_WATCH_*` prefix, `__` as separator)
//! 2. Project-level `.cosmic-watch/config.toml`
//! 3. User-level `~/.config/cosmic-watch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COSMIC_WATCH_API__BASE_URL` -> `api.base_url`,
//! `COSMIC_WATCH_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cw_config::CosmicConfig;
//!
//! let config = CosmicConfig::load().expect("config");
//! println!("feed endpoint: {}", config.api.endpoint("/asteroids/feed/"));
//! ```

mod api;
mod error;
mod general;
mod storage;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every override.
pub const ENV_PREFIX: &str = "COSMIC_WATCH_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CosmicConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CosmicConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cosmic-watch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base_url}' is not an http(s) URL"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.api.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.refresh_interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        self.general.risk_filter()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cosmic-watch").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CosmicConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_limit, 50);
        assert!(config.storage.data_dir.is_empty());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = CosmicConfig::default();
        config.api.base_url = "ftp://example.org".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let mut config = CosmicConfig::default();
        config.api.refresh_interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
