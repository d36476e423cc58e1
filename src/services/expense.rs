//! Expense service
//!
//! One method per user event. Each takes the day it acts on explicitly and
//! returns the refreshed [`DayView`], recomputing the monthly total from disk.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{DaybookError, DaybookResult};
use crate::models::{DayKey, EntryId, ExpenseInput, ExpenseRecord, Won};
use crate::services::{BudgetStatus, BudgetTracker, MonthlyAggregator};
use crate::storage::{LedgerLine, Storage};

/// Which line a delete targets
#[derive(Debug, Clone)]
pub enum DeleteSelector {
    /// First line with this name and amount
    Record(ExpenseRecord),
    /// The tagged line carrying this id
    Id(EntryId),
    /// Position among the day's lines (0-based)
    Index(usize),
}

/// Everything shown after an event: the day's lines, the month's total and
/// the budget bar
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: DayKey,
    pub lines: Vec<LedgerLine>,
    pub month_total: Won,
    pub budget: BudgetStatus,
}

impl DayView {
    /// Sum of the day's decoded lines
    pub fn day_total(&self) -> Won {
        self.lines
            .iter()
            .filter_map(|line| line.entry.as_ref())
            .map(|entry| entry.record.amount)
            .sum()
    }

    /// Whether the day has no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Service for adding, deleting and viewing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    audit: AuditLogger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            audit: AuditLogger::new(storage.paths().audit_log()),
            storage,
        }
    }

    /// Lines, month total and budget for `day`
    pub fn day_view(&self, day: DayKey) -> DayView {
        let month_total = MonthlyAggregator::new(&self.storage.ledger).total_for(day.month_key());
        DayView {
            day,
            lines: self.storage.ledger.lines(&day),
            month_total,
            budget: BudgetStatus {
                spent: month_total,
                max_budget: BudgetTracker::new(self.storage).max_budget(),
            },
        }
    }

    /// Validate and append an expense to `day`
    ///
    /// Invalid input is rejected before anything touches the disk.
    pub fn add(&self, day: DayKey, input: impl Into<ExpenseInput>) -> DaybookResult<DayView> {
        let record = input.into().into_record()?;
        let summary = record.to_string();

        let entry = self.storage.ledger.append(&day, record)?;
        info!(day = %day, expense = %summary, "expense added");
        self.audit_entry(AuditEntry::add(day, entry.id, summary, &entry.record));

        Ok(self.day_view(day))
    }

    /// Remove one line from `day`
    ///
    /// Returns `NotFound` when nothing matches; the ledger is unchanged.
    pub fn delete(&self, day: DayKey, selector: DeleteSelector) -> DaybookResult<DayView> {
        let ledger = &self.storage.ledger;

        let (removed, entry_id) = match &selector {
            DeleteSelector::Record(record) => {
                let removed = ledger.delete_one(&day, record)?;
                (removed.then(|| record.to_string()), None)
            }
            DeleteSelector::Id(id) => {
                let summary = ledger
                    .lines(&day)
                    .into_iter()
                    .find(|line| line.entry.as_ref().and_then(|e| e.id) == Some(*id))
                    .map(|line| line.display());
                let removed = ledger.delete_entry(&day, *id)?;
                (removed.then(|| summary.unwrap_or_else(|| id.to_string())), Some(*id))
            }
            DeleteSelector::Index(index) => {
                let removed = ledger.delete_at(&day, *index)?;
                let entry_id = removed
                    .as_deref()
                    .and_then(crate::codec::decode_line)
                    .and_then(|e| e.id);
                let summary = removed.map(|raw| {
                    let entry = crate::codec::decode_line(&raw);
                    crate::codec::display_text(&raw, entry.as_ref())
                });
                (summary, entry_id)
            }
        };

        let Some(summary) = removed else {
            return Err(DaybookError::entry_not_found(describe(&selector)));
        };

        info!(day = %day, expense = %summary, "expense deleted");
        self.audit_entry(AuditEntry::delete(day, entry_id, summary));

        Ok(self.day_view(day))
    }

    /// Find the id on `day` that `text` names (full id or short form)
    pub fn resolve_id(&self, day: DayKey, text: &str) -> DaybookResult<EntryId> {
        let matches: Vec<EntryId> = self
            .storage
            .ledger
            .lines(&day)
            .into_iter()
            .filter_map(|line| line.entry.and_then(|e| e.id))
            .filter(|id| id.matches(text))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(DaybookError::entry_not_found(text)),
            _ => Err(DaybookError::Validation(format!(
                "Id '{}' matches {} entries; give more characters",
                text,
                matches.len()
            ))),
        }
    }

    /// Most recent audit entries, oldest first; only `day`'s when given
    pub fn history(&self, day: Option<DayKey>, count: usize) -> DaybookResult<Vec<AuditEntry>> {
        match day {
            Some(day) => self.audit.read_day(day, count),
            None => self.audit.read_recent(count),
        }
    }

    fn audit_entry(&self, entry: AuditEntry) {
        // The ledger write already happened; a lost audit line is not worth failing it
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, "failed to write audit entry");
        }
    }
}

fn describe(selector: &DeleteSelector) -> String {
    match selector {
        DeleteSelector::Record(record) => record.to_string(),
        DeleteSelector::Id(id) => id.to_string(),
        DeleteSelector::Index(index) => format!("line {}", index + 1),
    }
}
