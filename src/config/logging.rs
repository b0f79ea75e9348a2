//! Tracing setup
//!
//! The TUI owns the terminal, so diagnostics go to `leftover.log` in the
//! config directory rather than stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::paths::LeftoverPaths;
use super::settings::Settings;
use crate::error::LeftoverError;

/// Build the filter: `RUST_LOG` wins, then the `log_level` setting
pub fn env_filter(settings: &Settings) -> Result<EnvFilter, LeftoverError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|e| {
            LeftoverError::Config(format!("Invalid log level '{}': {}", settings.log_level, e))
        }),
    }
}

/// Install a global subscriber appending to the log file
pub fn init_logging(paths: &LeftoverPaths, settings: &Settings) -> Result<(), LeftoverError> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| LeftoverError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LeftoverError::Config(format!("Failed to install logger: {}", e)))
}
