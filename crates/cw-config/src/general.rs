//! General application configuration.

use cw_core::RiskFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_filter() -> String {
    "all".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Risk filter applied by `cwatch feed` when `--filter` is not given.
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// Parse `default_filter`.
    pub fn risk_filter(&self) -> Result<RiskFilter, ConfigError> {
        self.default_filter
            .parse()
            .map_err(|e: cw_core::CoreError| ConfigError::InvalidValue {
                field: "general.default_filter".into(),
                reason: e.to_string(),
            })
    }
}
