//! Storage layer for Daybook
//!
//! Per-day text ledgers plus the settings needed to open them.

pub mod file_io;
pub mod ledger;

pub use ledger::{LedgerLine, LedgerStore};

use crate::config::paths::DaybookPaths;
use crate::config::settings::Settings;
use crate::error::DaybookError;

/// Main storage coordinator: paths, settings and the ledger store
pub struct Storage {
    paths: DaybookPaths,
    settings: Settings,
    pub ledger: LedgerStore,
}

impl Storage {
    /// Open storage under `paths`, creating directories as needed
    pub fn open(paths: DaybookPaths) -> Result<Self, DaybookError> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self::with_settings(paths, settings))
    }

    /// Build storage from already-loaded settings
    pub fn with_settings(paths: DaybookPaths, settings: Settings) -> Self {
        Self {
            ledger: LedgerStore::new(paths.ledger_dir(), settings.line_format),
            paths,
            settings,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DaybookPaths {
        &self.paths
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change settings and persist them
    pub fn update_settings<F>(&mut self, update: F) -> Result<(), DaybookError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.clone();
        update(&mut settings);
        settings.save(&self.paths)?;
        self.ledger = LedgerStore::new(self.paths.ledger_dir(), settings.line_format);
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LineFormat;
    use crate::models::Won;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaybookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").join("ledger").exists());
        assert_eq!(storage.ledger.format(), LineFormat::Tagged);
        assert_eq!(storage.ledger.dir(), storage.paths().ledger_dir());
    }

    #[test]
    fn test_update_settings_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaybookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths.clone()).unwrap();

        storage
            .update_settings(|s| {
                s.max_budget = Won::new(42);
                s.line_format = LineFormat::Legacy;
            })
            .unwrap();

        assert_eq!(storage.ledger.format(), LineFormat::Legacy);
        let reopened = Storage::open(paths).unwrap();
        assert_eq!(reopened.settings().max_budget, Won::new(42));
    }
}
