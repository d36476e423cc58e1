//! JSONL audit log
//!
//! Shares the ledger's line I/O: appends repair a torn final line, reads are
//! per line. An unparsable line costs that entry, not the whole history.

use std::path::PathBuf;

use tracing::warn;

use crate::error::DaybookResult;
use crate::models::DayKey;
use crate::storage::file_io::{append_line, read_lines};

use super::entry::AuditEntry;

/// Appends to and reads back `audit.log`
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> DaybookResult<()> {
        let json = serde_json::to_string(entry)?;
        append_line(&self.log_path, &json)
    }

    /// Every readable entry, oldest first
    pub fn read_all(&self) -> DaybookResult<Vec<AuditEntry>> {
        let entries: Vec<AuditEntry> = read_lines(&self.log_path)?
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(line = number + 1, error = %e, "skipping unreadable audit entry");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> DaybookResult<Vec<AuditEntry>> {
        Ok(last_n(self.read_all()?, count))
    }

    /// The last `count` entries that touched `day`, oldest first
    pub fn read_day(&self, day: DayKey, count: usize) -> DaybookResult<Vec<AuditEntry>> {
        let entries = self
            .read_all()?
            .into_iter()
            .filter(|entry| entry.day == Some(day))
            .collect();
        Ok(last_n(entries, count))
    }
}

fn last_n(mut entries: Vec<AuditEntry>, count: usize) -> Vec<AuditEntry> {
    let start = entries.len().saturating_sub(count);
    entries.drain(..start);
    entries
}
