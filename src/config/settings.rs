//! User settings for Daybook
//!
//! Holds the monthly budget ceiling and the line format used for new ledger
//! entries. The budget lives here so it survives restarts.

use serde::{Deserialize, Serialize};

use super::paths::DaybookPaths;
use crate::codec::LineFormat;
use crate::error::DaybookError;
use crate::models::Won;

/// Budget ceiling used until the user sets one
pub const DEFAULT_MAX_BUDGET: Won = Won::new(500_000);

/// User settings for Daybook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly spending ceiling
    #[serde(default = "default_max_budget")]
    pub max_budget: Won,

    /// Format used when appending new entries
    #[serde(default)]
    pub line_format: LineFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_budget() -> Won {
    DEFAULT_MAX_BUDGET
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_budget: default_max_budget(),
            line_format: LineFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DaybookPaths) -> Result<Self, DaybookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DaybookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DaybookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DaybookPaths) -> Result<(), DaybookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DaybookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            DaybookError::SaveFailed(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_budget, Won::new(500_000));
        assert_eq!(settings.line_format, LineFormat::Tagged);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaybookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.max_budget = Won::new(300_000);
        settings.line_format = LineFormat::Legacy;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.max_budget, Won::new(300_000));
        assert_eq!(loaded.line_format, LineFormat::Legacy);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"max_budget": 1000}"#).unwrap();
        assert_eq!(settings.max_budget, Won::new(1000));
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.line_format, LineFormat::Tagged);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaybookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DaybookError::Config(_)));
    }
}
