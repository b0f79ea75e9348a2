//! Path management for Leftover
//!
//! Only settings and the log file live on disk; budget data is never
//! written anywhere.
//!
//! ## Path Resolution Order
//!
//! 1. `LEFTOVER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/leftover` on Linux, `~/Library/Application Support/...`
//!    on macOS, `%APPDATA%\...` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LeftoverError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LEFTOVER_CONFIG_DIR";

/// Manages all paths used by Leftover
#[derive(Debug, Clone)]
pub struct LeftoverPaths {
    base_dir: PathBuf,
}

impl LeftoverPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LeftoverError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "leftover")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LeftoverError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("leftover.log")
    }

    /// Create the base directory if missing
    pub fn ensure_directories(&self) -> Result<(), LeftoverError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LeftoverError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
