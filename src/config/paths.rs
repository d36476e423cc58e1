//! Path management for Daybook
//!
//! Resolves where settings, the audit log and the per-day ledger files live.
//!
//! ## Path Resolution Order
//!
//! 1. `DAYBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `daybook` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DaybookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DAYBOOK_DATA_DIR";

/// Manages all paths used by Daybook
#[derive(Debug, Clone)]
pub struct DaybookPaths {
    /// Base directory for all Daybook data
    base_dir: PathBuf,
}

impl DaybookPaths {
    /// Create a new DaybookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, DaybookError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DaybookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory holding one text file per calendar day
    pub fn ledger_dir(&self) -> PathBuf {
        self.data_dir().join("ledger")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and ledger directories exist
    pub fn ensure_directories(&self) -> Result<(), DaybookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DaybookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.ledger_dir())
            .map_err(|e| DaybookError::Io(format!("Failed to create ledger directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, DaybookError> {
    ProjectDirs::from("", "", "daybook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DaybookError::Config("Could not determine home directory".into()))
}
