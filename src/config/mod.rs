pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, EditMode, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ripplist")
        .join("config.toml")
}

/// A loaded config plus the error from writing the defaults, if that failed.
/// Logging is not up yet while the config loads, so the caller reports it.
pub type Loaded = (AppConfig, Option<anyhow::Error>);

/// Load the user's config, writing the defaults out on first start.
pub fn load_config() -> Result<Loaded> {
    load_or_seed(&config_path())
}

pub fn load_or_seed(path: &Path) -> Result<Loaded> {
    if path.exists() {
        return Ok((load_config_from(path)?, None));
    }
    let config = AppConfig::default();
    let seed_error = save_config(&config, path).err();
    Ok((config, seed_error))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
