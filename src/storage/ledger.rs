//! Per-day ledger files
//!
//! One text file per calendar day, one expense per line. Reads never fail
//! from the caller's point of view; writes report `SaveFailed`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::{self, LineFormat};
use crate::error::{DaybookError, DaybookResult};
use crate::models::{DayKey, EntryId, ExpenseRecord, LedgerEntry, MonthKey};

use super::file_io::{append_line, read_lines, write_lines_atomic};

/// A non-blank line as read back from a day's file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerLine {
    /// Position among the day's non-blank lines (0-based)
    pub index: usize,
    /// Line text as stored
    pub raw: String,
    /// Decoded entry, if the line is in a known format
    pub entry: Option<LedgerEntry>,
}

impl LedgerLine {
    /// Text to show for this line
    pub fn display(&self) -> String {
        codec::display_text(&self.raw, self.entry.as_ref())
    }

    /// Whether this line counts towards totals
    pub fn is_decoded(&self) -> bool {
        self.entry.is_some()
    }
}

/// Reads and writes the ledger file of each day
#[derive(Debug, Clone)]
pub struct LedgerStore {
    dir: PathBuf,
    format: LineFormat,
}

impl LedgerStore {
    /// Create a store over `dir`, appending new entries in `format`
    pub fn new(dir: PathBuf, format: LineFormat) -> Self {
        Self { dir, format }
    }

    /// Directory holding the day files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Format used by [`LedgerStore::append`]
    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Path of a day's ledger file
    pub fn path_for(&self, day: &DayKey) -> PathBuf {
        self.dir.join(day.file_name())
    }

    /// Non-blank lines of a day in file order, or an error if the file
    /// exists but cannot be read. A missing file is an empty ledger.
    pub fn try_read(&self, day: &DayKey) -> DaybookResult<Vec<String>> {
        let lines = read_lines(self.path_for(day))?;
        Ok(lines.into_iter().filter(|l| !codec::is_blank(l)).collect())
    }

    /// Non-blank lines of a day in file order
    ///
    /// I/O errors are logged and read as "no data".
    pub fn read(&self, day: &DayKey) -> Vec<String> {
        match self.try_read(day) {
            Ok(lines) => {
                debug!(day = %day, count = lines.len(), "read ledger");
                lines
            }
            Err(e) => {
                warn!(day = %day, error = %e, "ledger unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Decoded view of [`LedgerStore::read`]
    pub fn lines(&self, day: &DayKey) -> Vec<LedgerLine> {
        self.read(day)
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let entry = codec::decode_line(&raw);
                LedgerLine { index, raw, entry }
            })
            .collect()
    }

    /// Append a record to the end of a day's file, creating it if absent
    pub fn append(&self, day: &DayKey, record: ExpenseRecord) -> DaybookResult<LedgerEntry> {
        record.validate()?;
        let (entry, line) = self.format.encode(record)?;
        append_line(self.path_for(day), &line)?;
        info!(day = %day, format = %self.format, "appended expense");
        Ok(entry)
    }

    /// Remove the first line matching `record`
    ///
    /// A line matches when its trimmed text equals the record's legacy
    /// encoding, or when it decodes to the same name and amount. A category
    /// on `record` must also agree, so legacy lines only match an
    /// uncategorised record. Returns `false` and leaves the file untouched
    /// when nothing matches.
    pub fn delete_one(&self, day: &DayKey, record: &ExpenseRecord) -> DaybookResult<bool> {
        let encoded = codec::encode_legacy(record);
        let encoded = encoded.trim();
        let removed = self.remove_first(day, |line| {
            (record.category.is_none() && line.trim() == encoded)
                || codec::decode_line(line).is_some_and(|e| e.record.matches_selector(record))
        })?;
        Ok(removed.is_some())
    }

    /// Remove the line carrying `id`
    pub fn delete_entry(&self, day: &DayKey, id: EntryId) -> DaybookResult<bool> {
        let removed = self.remove_first(day, |line| {
            codec::decode_line(line).is_some_and(|e| e.id == Some(id))
        })?;
        Ok(removed.is_some())
    }

    /// Remove the non-blank line at `index`, returning its text
    pub fn delete_at(&self, day: &DayKey, index: usize) -> DaybookResult<Option<String>> {
        let mut position = 0usize;
        self.remove_first(day, |_| {
            let hit = position == index;
            position += 1;
            hit
        })
    }

    /// Days of `month` that have a ledger file, in calendar order
    pub fn days_in(&self, month: MonthKey) -> DaybookResult<Vec<DayKey>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            DaybookError::Io(format!("Failed to list {}: {}", self.dir.display(), e))
        })?;

        let mut days: Vec<DayKey> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().and_then(DayKey::from_file_name))
            .filter(|day| day.month_key() == month)
            .collect();
        days.sort();
        Ok(days)
    }

    /// Read-modify-rewrite: drop the first non-blank line `matches` accepts
    fn remove_first<F>(&self, day: &DayKey, mut matches: F) -> DaybookResult<Option<String>>
    where
        F: FnMut(&str) -> bool,
    {
        // Reading must not be lossy here, or the rewrite would erase the file
        let mut lines = self.try_read(day)?;

        let Some(position) = lines.iter().position(|line| matches(line)) else {
            debug!(day = %day, "no matching line to delete");
            return Ok(None);
        };

        let removed = lines.remove(position);
        write_lines_atomic(self.path_for(day), &lines)?;
        info!(day = %day, remaining = lines.len(), "deleted expense");
        Ok(Some(removed))
    }
}
