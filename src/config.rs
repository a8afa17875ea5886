//! Configuration management for vr-extras
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_DATE_FORMAT, CONFIG_FILE_LOCAL, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_HEADER, DEFAULT_LOG_LEVEL,
    DEFAULT_TIMESPAN_PRECISION, MAX_TIMESPAN_PRECISION,
};
use crate::utils::encoding::Padding;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub encoding: EncodingConfig,
    pub logging: LoggingConfig,
}

/// Output formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Significant digits for timespans shorter than a minute
    pub timespan_precision: usize,
}

/// Base64 encoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Keep trailing `=` padding on base64url output
    pub pad_base64: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// One of off, error, warn, info, debug, trace
    pub level: String,
    /// Also write log records to the log file in the data directory
    pub log_to_file: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            timespan_precision: DEFAULT_TIMESPAN_PRECISION,
        }
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self { pad_base64: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_file: false,
        }
    }
}

impl EncodingConfig {
    pub fn padding(&self) -> Padding {
        Padding::from(self.pad_base64)
    }
}

impl LoggingConfig {
    /// Parse the configured level name
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim())
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load the first config file found, `./vr-extras.toml` before the XDG one, or defaults
    pub fn load() -> Result<Self> {
        match std::iter::once(PathBuf::from(CONFIG_FILE_LOCAL))
            .chain(Self::get_default_config_path().ok())
            .find(|path| path.exists())
        {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let precision = self.format.timespan_precision;
        if !(1..=MAX_TIMESPAN_PRECISION).contains(&precision) {
            anyhow::bail!(
                "timespan_precision must be between 1 and {}, got {}",
                MAX_TIMESPAN_PRECISION,
                precision
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let generated_on = chrono::Local::now().format(CONFIG_DATE_FORMAT);
        let full_content = format!("{}\n# Generated on {}\n\n{}", CONFIG_HEADER, generated_on, body);

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
