use std::path::Path;

use anyhow::Context;

/// Load `.env` (if present) and then the layered configuration.
pub fn load_config() -> anyhow::Result<cw_config::CosmicConfig> {
    load_dotenv()?;
    cw_config::CosmicConfig::load().context("failed to load configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv_from(&cwd)
}

fn load_dotenv_from(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
