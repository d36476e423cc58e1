//! Budget tracking
//!
//! "Spent" always comes from the monthly aggregate of the ledger, so it
//! cannot drift from what is on disk. Only the ceiling is stored, in
//! settings.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{DaybookError, DaybookResult};
use crate::models::{MonthKey, Won};
use crate::services::MonthlyAggregator;
use crate::storage::Storage;

/// Spending against the monthly ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub spent: Won,
    pub max_budget: Won,
}

impl BudgetStatus {
    /// `spent / max_budget * 100`, truncated; 0 when there is no budget
    pub fn percent(&self) -> u64 {
        if self.max_budget.is_zero() {
            return 0;
        }
        let pct = u128::from(self.spent.value()) * 100 / u128::from(self.max_budget.value());
        u64::try_from(pct).unwrap_or(u64::MAX)
    }

    /// Percentage clamped to a 0-100 progress range
    pub fn display_percent(&self) -> u8 {
        // min(100) makes the cast lossless
        self.percent().min(100) as u8
    }

    /// What is left before the ceiling (zero once over)
    pub fn remaining(&self) -> Won {
        self.max_budget.saturating_sub(self.spent)
    }

    /// Whether spending went past the ceiling
    pub fn is_over(&self) -> bool {
        self.spent > self.max_budget
    }
}

/// Budget status for a month, read from storage
pub struct BudgetTracker<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetTracker<'a> {
    /// Create a new budget tracker
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current ceiling
    pub fn max_budget(&self) -> Won {
        self.storage.settings().max_budget
    }

    /// Spending in `month` against the ceiling
    pub fn status(&self, month: MonthKey) -> BudgetStatus {
        BudgetStatus {
            spent: MonthlyAggregator::new(&self.storage.ledger).total_for(month),
            max_budget: self.max_budget(),
        }
    }
}

/// Parse the budget dialog's text; an empty entry means "leave unchanged"
pub fn parse_budget_input(text: &str) -> DaybookResult<Option<Won>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    Won::parse(text)
        .map(Some)
        .map_err(|e| DaybookError::Validation(format!("Invalid budget '{}': {}", text.trim(), e)))
}

/// Persist a new ceiling, returning the previous one
pub fn set_max_budget(storage: &mut Storage, amount: Won) -> DaybookResult<Won> {
    let previous = storage.settings().max_budget;
    storage.update_settings(|s| s.max_budget = amount)?;
    info!(before = %previous, after = %amount, "budget updated");

    let audit = AuditLogger::new(storage.paths().audit_log());
    if let Err(e) = audit.log(&AuditEntry::set_budget(previous, amount)) {
        warn!(error = %e, "failed to write audit entry");
    }

    Ok(previous)
}
