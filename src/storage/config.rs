//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Datastore settings
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            storage: StorageSettings::default(),
        }
    }
}

impl AppConfig {
    /// Full path of the progress log document.
    pub fn progress_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage.progress_log_file)
    }

    /// Full path of the rehab plan document.
    pub fn rehab_plan_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage.rehab_plan_file)
    }

    /// Full path of the resource library document.
    pub fn resources_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage.resources_file)
    }
}

/// Datastore file names, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Progress log document (one JSON array of entries)
    pub progress_log_file: String,
    /// Rehab plan document
    pub rehab_plan_file: String,
    /// Resource library document
    pub resources_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            progress_log_file: "progress-logs.json".to_string(),
            rehab_plan_file: "rehab-plan.json".to_string(),
            resources_file: "resources.json".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rehabtrack", "RehabTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file. The config is read-only at
/// runtime; a missing file yields the defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
