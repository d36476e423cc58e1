//! CSV Export functionality

use std::io::Write;

use super::{collect_month_rows, ExportRow};
use crate::error::{DaybookError, DaybookResult};
use crate::models::MonthKey;
use crate::storage::LedgerStore;

/// Export a month's entries as CSV with a header row, returning the row count
pub fn export_month_csv<W: Write>(
    store: &LedgerStore,
    month: MonthKey,
    writer: W,
) -> DaybookResult<usize> {
    let rows = collect_month_rows(store, month);
    write_rows(&rows, writer)?;
    Ok(rows.len())
}

fn write_rows<W: Write>(rows: &[ExportRow], writer: W) -> DaybookResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if rows.is_empty() {
        // serialize() only emits the header alongside the first record
        csv_writer
            .write_record(["date", "id", "name", "amount", "category"])
            .map_err(|e| DaybookError::Export(e.to_string()))?;
    }

    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| DaybookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DaybookError::Export(e.to_string()))?;

    Ok(())
}
