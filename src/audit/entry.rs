//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DayKey, EntryId, Won};

/// Kinds of ledger mutation that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Expense appended to a day
    Add,
    /// Expense removed from a day
    Delete,
    /// Monthly budget ceiling changed
    SetBudget,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::SetBudget => write!(f, "SET_BUDGET"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Ledger day touched, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayKey>,

    /// Id of the affected entry (tagged lines only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<EntryId>,

    /// The line or value as shown to the user
    pub summary: String,

    /// Value before the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Value after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an appended expense
    pub fn add<T: Serialize>(
        day: DayKey,
        entry_id: Option<EntryId>,
        summary: impl Into<String>,
        added: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            day: Some(day),
            entry_id,
            summary: summary.into(),
            before: None,
            after: serde_json::to_value(added).ok(),
        }
    }

    /// Entry for a removed line
    pub fn delete(day: DayKey, entry_id: Option<EntryId>, removed_line: impl Into<String>) -> Self {
        let removed_line = removed_line.into();
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            day: Some(day),
            entry_id,
            before: Some(serde_json::Value::String(removed_line.clone())),
            summary: removed_line,
            after: None,
        }
    }

    /// Entry for a budget change
    pub fn set_budget(before: Won, after: Won) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::SetBudget,
            day: None,
            entry_id: None,
            summary: format!("{} -> {}", before, after),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
        );

        if let Some(day) = &self.day {
            output.push_str(&format!(" {}", day));
        }
        if let Some(id) = &self.entry_id {
            output.push_str(&format!(" {}", id));
        }
        output.push_str(&format!(" ({})", self.summary));

        output
    }
}
