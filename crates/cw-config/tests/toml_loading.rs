//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use cw_config::CosmicConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://neo.example.org/api"
timeout_secs = 30
refresh_interval_secs = 300
"#,
        )?;

        let config: CosmicConfig = Figment::from(Serialized::defaults(CosmicConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://neo.example.org/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.refresh_interval_secs, 300);
        assert_eq!(config.general.default_filter, "all");
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_filter = "high"
"#,
        )?;

        let config: CosmicConfig = Figment::from(Serialized::defaults(CosmicConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_filter, "high");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cosmic-watch")?;
        jail.create_file(
            ".cosmic-watch/config.toml",
            r#"
[storage]
data_dir = "/var/lib/cosmic-watch"
"#,
        )?;

        let config = CosmicConfig::load().expect("config loads");
        assert_eq!(config.storage.data_dir, "/var/lib/cosmic-watch");
        Ok(())
    });
}

#[test]
fn invalid_filter_in_file_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cosmic-watch")?;
        jail.create_file(
            ".cosmic-watch/config.toml",
            r#"
[general]
default_filter = "catastrophic"
"#,
        )?;

        assert!(CosmicConfig::load().is_err());
        Ok(())
    });
}
