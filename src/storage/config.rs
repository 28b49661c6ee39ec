//! Application configuration.
//!
//! Stored as TOML in the platform data directory. A missing file yields the
//! defaults; missing keys inside a file fall back to their section defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::plans::generator::Questionnaire;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Scheduling settings
    pub scheduler: SchedulerSettings,
    /// Workout session settings
    pub session: SessionSettings,
    /// Questionnaire answers used when no plan file is given
    pub questionnaire: Questionnaire,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            scheduler: SchedulerSettings::default(),
            session: SessionSettings::default(),
            questionnaire: Questionnaire::default(),
        }
    }
}

/// Scheduling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Training days per week when the caller does not give one
    pub default_frequency: u32,
    /// Number of days shown by the upcoming-workouts view
    pub upcoming_days: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            default_frequency: 3,
            upcoming_days: 14,
        }
    }
}

/// Workout session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Rest between sets when the routine does not prescribe one
    pub default_rest_seconds: u32,
    /// Start the next set automatically when the rest timer ends
    pub auto_advance: bool,
    /// Step used by the "+rest" control
    pub rest_extension_seconds: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_rest_seconds: 60,
            auto_advance: true,
            rest_extension_seconds: 15,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "treino", "Treino")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.data_dir = data_dir;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
