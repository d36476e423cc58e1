//! Line codec for ledger files
//!
//! Converts between an [`ExpenseRecord`] and its one-line text form. Two
//! formats can sit side by side in the same file:
//!
//! - legacy: `점심 : 8,000원`
//! - tagged: `{"id":"…","name":"점심","amount":8000}`
//!
//! Readers accept both; [`LineFormat`] picks what new entries are written as.

mod legacy;
mod tagged;

pub use legacy::{decode_legacy, encode_legacy, SEPARATOR};
pub use tagged::{decode_tagged, encode_tagged};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::DaybookResult;
use crate::models::{EntryId, ExpenseRecord, LedgerEntry};

/// Format used when appending entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// `name : amount원`, no id
    Legacy,
    /// JSON object with an id
    #[default]
    Tagged,
}

impl LineFormat {
    /// Encode a record, returning the entry as it will read back and the
    /// newline-terminated line
    pub fn encode(&self, record: ExpenseRecord) -> DaybookResult<(LedgerEntry, String)> {
        match self {
            Self::Legacy => {
                let line = encode_legacy(&record);
                Ok((LedgerEntry::untagged(record), line))
            }
            Self::Tagged => {
                let id = EntryId::new();
                let line = encode_tagged(id, &record)?;
                Ok((
                    LedgerEntry {
                        id: Some(id),
                        record,
                    },
                    line,
                ))
            }
        }
    }
}

impl std::fmt::Display for LineFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Tagged => write!(f, "tagged"),
        }
    }
}

/// Whether a line is ignored entirely (display and totals)
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Decode a line in either format
pub fn decode_line(line: &str) -> Option<LedgerEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let legacy = || decode_legacy(line).map(LedgerEntry::untagged);
    if line.starts_with('{') {
        decode_tagged(line).or_else(legacy)
    } else {
        legacy()
    }
}

/// Text shown for a line: the legacy rendering of a decoded entry, or the
/// raw line when it does not decode
pub fn display_text(raw: &str, entry: Option<&LedgerEntry>) -> String {
    match entry {
        Some(entry) => entry.record.to_string(),
        None => raw.trim().to_string(),
    }
}
