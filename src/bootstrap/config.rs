//! # Configuration Loader
//!
//! `load_config` is pure data loading: whatever is in the file becomes the
//! `AppConfig`, empty values included. `resolve_config` is where the CLI
//! decides which file to read and what empty values mean.

use anyhow::Context;
use std::path::{Path, PathBuf};

use ec_core::config::AppConfig;
use tracing::debug;

const APP_DIR: &str = "ecclesia";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_CHURCH_ID: &str = "default";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Loads the config the CLI should run with.
///
/// An explicit path must exist. Without one, `<config dir>/ecclesia/config.toml`
/// is read if present. Empty values are then filled with locations under the
/// platform's local data directory.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(path)?,
            _ => {
                debug!("No config file found, using defaults");
                AppConfig::empty()
            }
        },
    };

    let data_dir = dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR));

    Ok(fill_defaults(config, &data_dir))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn fill_defaults(mut config: AppConfig, data_dir: &Path) -> AppConfig {
    if config.church_id.trim().is_empty() {
        config.church_id = DEFAULT_CHURCH_ID.to_string();
    }
    if config.database_path.as_os_str().is_empty() {
        config.database_path = data_dir.join("ecclesia.db");
    }
    if config.settings_path.as_os_str().is_empty() {
        config.settings_path = data_dir.join("settings.json");
    }
    if config.log_dir.as_os_str().is_empty() {
        config.log_dir = data_dir.join("logs");
    }
    config
}
