//! Custom error types for Daybook
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Daybook operations
#[derive(Error, Debug)]
pub enum DaybookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (empty name, bad amount, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A ledger write did not reach disk
    #[error("Save failed: {0}")]
    SaveFailed(String),

    /// Date or month that does not exist on the calendar
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DaybookError {
    /// Create a "not found" error for ledger entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means a write was lost
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::SaveFailed(_))
    }
}

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Daybook operations
pub type DaybookResult<T> = Result<T, DaybookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DaybookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = DaybookError::entry_not_found("점심 : 8,000원");
        assert_eq!(err.to_string(), "Expense not found: 점심 : 8,000원");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_failed_error() {
        let err = DaybookError::SaveFailed("disk full".into());
        assert_eq!(err.to_string(), "Save failed: disk full");
        assert!(err.is_save_failure());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let daybook_err: DaybookError = io_err.into();
        assert!(matches!(daybook_err, DaybookError::Io(_)));
    }
}
