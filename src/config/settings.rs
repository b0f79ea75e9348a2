//! User settings for Leftover
//!
//! Display preferences and log verbosity. Every field has a default so a
//! partial or missing `config.json` still loads.

use serde::{Deserialize, Serialize};

use super::paths::LeftoverPaths;
use crate::display::{AmountFormat, Locale};
use crate::error::LeftoverError;

/// User settings for Leftover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number formatting locale
    #[serde(default)]
    pub locale: Locale,

    /// Text shown after every amount
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_suffix() -> String {
    "kr".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            currency_suffix: default_currency_suffix(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file is missing
    pub fn load_or_create(paths: &LeftoverPaths) -> Result<Self, LeftoverError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LeftoverError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LeftoverError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LeftoverPaths) -> Result<(), LeftoverError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LeftoverError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LeftoverError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Amount formatter built from these settings
    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(self.locale, self.currency_suffix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::NbNo);
        assert_eq!(settings.currency_suffix, "kr");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LeftoverPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LeftoverPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            locale: Locale::EnUs,
            currency_suffix: "USD".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::EnUs);
        assert_eq!(loaded.currency_suffix, "USD");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LeftoverPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "locale": "de-DE" }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::DeDe);
        assert_eq!(loaded.currency_suffix, "kr");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LeftoverPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_amount_format() {
        let settings = Settings::default();
        let fmt = settings.amount_format();
        assert_eq!(fmt.format(crate::models::Money::from_whole(2000)), "2\u{a0}000 kr");
    }
}
