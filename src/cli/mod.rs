//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};

use crate::error::DaybookError;

/// One-line message shown to the user when a command fails
pub fn notification(err: &DaybookError) -> String {
    match err {
        DaybookError::SaveFailed(detail) => format!("save failed: {}", detail),
        DaybookError::Validation(msg) => msg.clone(),
        other => format!("error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification() {
        assert_eq!(
            notification(&DaybookError::SaveFailed("disk full".into())),
            "save failed: disk full"
        );
        assert_eq!(
            notification(&DaybookError::Validation("All fields are required".into())),
            "All fields are required"
        );
        assert_eq!(
            notification(&DaybookError::entry_not_found("line 3")),
            "error: Expense not found: line 3"
        );
    }
}
