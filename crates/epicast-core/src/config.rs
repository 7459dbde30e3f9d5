// Rust guideline compliant 2026-10-12

//! Configuration management for Epicast.

use crate::settings::{GrowthFactor, SprintWindow};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "epicast.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Epicast behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Closed sprints used for velocity.
    #[serde(default)]
    pub sprint_window: SprintWindow,

    /// Backlog growth applied during projection.
    #[serde(default)]
    pub growth_factor: GrowthFactor,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Directory holding `<EPIC>.json` issue snapshots.
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprint_window: SprintWindow::default(),
            growth_factor: GrowthFactor::default(),
            output_format: OutputFormat::default(),
            snapshot_dir: default_snapshot_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `config_path`, if it exists
    /// 3. Environment variables with `EPICAST_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            tracing::debug!(path = %config_path.display(), "Loaded config file");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file that must exist.
    ///
    /// Used for explicitly named config files, where a missing file is a
    /// mistake rather than a reason to fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the file does not exist, otherwise
    /// the same errors as [`Config::load`].
    pub fn load_required(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(Error::InvalidConfig(format!(
                "Config file '{}' not found",
                config_path.display()
            )));
        }
        Self::load(config_path)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `EPICAST_SPRINT_WINDOW` - all, 3 or 6
    /// - `EPICAST_GROWTH_FACTOR` - 0, 1/5, 1/3 or 1/2
    /// - `EPICAST_OUTPUT_FORMAT` - json, table or plain
    /// - `EPICAST_SNAPSHOT_DIR` - snapshot directory
    /// - `EPICAST_LOG_LEVEL` - error, warn, info or debug
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("EPICAST_SPRINT_WINDOW") {
            self.sprint_window = val.parse().map_err(|e: Error| {
                Error::InvalidConfig(format!("EPICAST_SPRINT_WINDOW: {}", e))
            })?;
        }

        if let Ok(val) = std::env::var("EPICAST_GROWTH_FACTOR") {
            self.growth_factor = val.parse().map_err(|e: Error| {
                Error::InvalidConfig(format!("EPICAST_GROWTH_FACTOR: {}", e))
            })?;
        }

        if let Ok(val) = std::env::var("EPICAST_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "EPICAST_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("EPICAST_SNAPSHOT_DIR") {
            self.snapshot_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("EPICAST_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is unknown or `snapshot_dir` is empty.
    fn validate(&self) -> Result<()> {
        if !matches!(
            self.log_level.as_str(),
            "error" | "warn" | "info" | "debug"
        ) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be error, warn, info or debug, got {}",
                self.log_level
            )));
        }

        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "snapshot_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}
