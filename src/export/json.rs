//! JSON Export functionality
//!
//! Exports one month with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::{collect_month_rows, ExportRow};
use crate::error::{DaybookError, DaybookResult};
use crate::models::MonthKey;
use crate::storage::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A month's entries and total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Month in `YYYY-MM` form
    pub month: String,

    /// Sum of all exported amounts
    pub total: u64,

    pub entries: Vec<ExportRow>,
}

impl MonthExport {
    /// Build the export for `month`
    pub fn collect(store: &LedgerStore, month: MonthKey) -> Self {
        let entries = collect_month_rows(store, month);
        let total = entries
            .iter()
            .fold(0u64, |acc, row| acc.saturating_add(row.amount));

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month: month.to_string(),
            total,
            entries,
        }
    }
}

/// Export a month as pretty JSON, returning the entry count
pub fn export_month_json<W: Write>(
    store: &LedgerStore,
    month: MonthKey,
    writer: &mut W,
) -> DaybookResult<usize> {
    let export = MonthExport::collect(store, month);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| DaybookError::Export(format!("Failed to serialize export: {}", e)))?;
    writeln!(writer).map_err(|e| DaybookError::Export(e.to_string()))?;

    Ok(export.entries.len())
}
