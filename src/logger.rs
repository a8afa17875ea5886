//! Logging setup
//!
//! The library only talks to the `log` facade. The binary installs a `fern`
//! dispatch that writes to stderr and, when configured, to a log file in the
//! user's data directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a logger is already
/// installed or the log file cannot be opened.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    build_dispatch(config)?
        .apply()
        .context("Failed to install logger")?;

    log::debug!("Logging initialized at level {}", config.level);
    Ok(())
}

/// Build the dispatch without installing it
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if config.log_to_file && level != LevelFilter::Off {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Location of the log file, `<data_local_dir>/vr-extras/vr-extras.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
