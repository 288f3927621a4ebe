//! Local persisted-state configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the session credential and watchlist blobs.
    /// Empty means the platform data directory (`~/.local/share/cosmic-watch` on Linux).
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the effective data directory.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        if self.data_dir.is_empty() {
            dirs::data_dir().map(|p| p.join("cosmic-watch"))
        } else {
            Some(PathBuf::from(&self.data_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            data_dir: "/tmp/cw-data".into(),
        };
        assert_eq!(
            config.resolved_data_dir(),
            Some(PathBuf::from("/tmp/cw-data"))
        );
    }

    #[test]
    fn default_dir_is_namespaced() {
        let config = StorageConfig::default();
        if let Some(dir) = config.resolved_data_dir() {
            assert!(dir.ends_with("cosmic-watch"));
        }
    }
}
