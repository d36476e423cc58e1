//! Export module for Daybook
//!
//! Writes a month of decoded entries out for spreadsheets or scripts:
//! - CSV: one row per entry
//! - JSON: rows plus the month total, with a schema version

pub mod csv;
pub mod json;

pub use self::csv::export_month_csv;
pub use self::json::{export_month_json, MonthExport, EXPORT_SCHEMA_VERSION};

use serde::{Deserialize, Serialize};

use crate::models::MonthKey;
use crate::storage::LedgerStore;

/// One exported entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: String,
    /// Empty for legacy lines
    pub id: String,
    pub name: String,
    pub amount: u64,
    /// Empty when uncategorised
    pub category: String,
}

/// Decoded entries of every day in `month`, in calendar then file order
pub fn collect_month_rows(store: &LedgerStore, month: MonthKey) -> Vec<ExportRow> {
    month
        .days()
        .flat_map(|day| {
            store
                .lines(&day)
                .into_iter()
                .filter_map(|line| line.entry)
                .map(move |entry| ExportRow {
                    date: day.to_string(),
                    id: entry.id.map(|id| id.as_uuid().to_string()).unwrap_or_default(),
                    name: entry.record.name,
                    amount: entry.record.amount.value(),
                    category: entry.record.category.unwrap_or_default(),
                })
        })
        .collect()
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
