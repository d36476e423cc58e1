//! One JSON object per line, carrying an entry id
//!
//! Same JSONL shape as the audit log. Any item name survives a round trip.

use serde::{Deserialize, Serialize};

use crate::error::DaybookResult;
use crate::models::{EntryId, ExpenseRecord, LedgerEntry, Won};

#[derive(Debug, Serialize, Deserialize)]
struct TaggedLine {
    id: EntryId,
    name: String,
    amount: Won,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Encode a record under `id` as one newline-terminated JSON line
pub fn encode_tagged(id: EntryId, record: &ExpenseRecord) -> DaybookResult<String> {
    let line = TaggedLine {
        id,
        name: record.name.clone(),
        amount: record.amount,
        category: record.category.clone(),
    };
    Ok(format!("{}\n", serde_json::to_string(&line)?))
}

/// Decode a tagged line; `None` if it is not valid JSON of the right shape
/// or the record inside is invalid
pub fn decode_tagged(line: &str) -> Option<LedgerEntry> {
    let line: TaggedLine = serde_json::from_str(line.trim()).ok()?;
    let record = ExpenseRecord {
        name: line.name,
        amount: line.amount,
        category: line.category,
    };
    record.validate().ok()?;
    Some(LedgerEntry {
        id: Some(line.id),
        record,
    })
}
