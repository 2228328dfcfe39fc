//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//! > Missing keys become empty values; deciding what an empty value means is
//! > the caller's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tenant the app operates on (may be empty - this is a fact, not an error)
    pub church_id: String,

    /// SQLite database path
    pub database_path: PathBuf,

    /// JSON settings file path
    pub settings_path: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            church_id: str_at("general", "church_id"),
            database_path: PathBuf::from(str_at("storage", "database_path")),
            settings_path: PathBuf::from(str_at("paths", "settings_path")),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
        })
    }

    /// Creates an empty config (all fields empty).
    pub fn empty() -> Self {
        Self {
            church_id: String::new(),
            database_path: PathBuf::new(),
            settings_path: PathBuf::new(),
            log_dir: PathBuf::new(),
        }
    }
}
