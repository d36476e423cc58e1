//! The `"{name} : {amount}원"` line format
//!
//! The name is not escaped. A name containing `" : "` or `"원"` cannot be
//! read back reliably; the tagged format exists for that reason.

use crate::models::money::WON_SUFFIX;
use crate::models::{ExpenseRecord, Won};

/// Separator between item name and amount
pub const SEPARATOR: &str = " : ";

/// Encode a record as one newline-terminated line, e.g. `"커피 : 4,500원\n"`
pub fn encode_legacy(record: &ExpenseRecord) -> String {
    format!("{}{}{}\n", record.name, SEPARATOR, record.amount)
}

/// Decode a line written by [`encode_legacy`] (or by hand in the same shape)
///
/// The amount is whatever sits between the first `" : "` and the next `"원"`,
/// with `,` separators allowed. Returns `None` for anything else.
pub fn decode_legacy(line: &str) -> Option<ExpenseRecord> {
    let line = line.trim();
    let (name, rest) = line.split_once(SEPARATOR)?;
    let (amount, _) = rest.split_once(WON_SUFFIX)?;
    let amount = Won::parse(amount).ok()?;
    ExpenseRecord::new(name, amount).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, amount: u64) -> ExpenseRecord {
        ExpenseRecord::new(name, Won::new(amount)).unwrap()
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_legacy(&record("커피", 4500)), "커피 : 4,500원\n");
        assert_eq!(encode_legacy(&record("껌", 500)), "껌 : 500원\n");
    }

    #[test]
    fn test_round_trip_without_delimiters_in_name() {
        for (name, amount) in [("점심", 8000), ("커피", 4500), ("bus fare", 0), ("월세", 650_000)] {
            let original = record(name, amount);
            assert_eq!(decode_legacy(&encode_legacy(&original)), Some(original));
        }
    }

    #[test]
    fn test_decode_accepts_ungrouped_amount() {
        assert_eq!(decode_legacy("점심 : 8000원"), Some(record("점심", 8000)));
        assert_eq!(decode_legacy("  점심 : 8,000원  "), Some(record("점심", 8000)));
    }

    #[test]
    fn test_decode_rejects_missing_delimiters() {
        assert_eq!(decode_legacy("택시 8000"), None);
        assert_eq!(decode_legacy("택시 : 8000"), None);
        assert_eq!(decode_legacy("택시 8000원"), None);
        assert_eq!(decode_legacy(""), None);
    }

    #[test]
    fn test_decode_rejects_bad_amount_or_name() {
        assert_eq!(decode_legacy("택시 : 팔천원"), None);
        assert_eq!(decode_legacy("택시 : -800원"), None);
        assert_eq!(decode_legacy(" : 800원"), None);
    }

    #[test]
    fn test_delimiter_in_name_is_ambiguous() {
        // "a : b" as a name reads back as name "a" with an unparsable amount
        let tricky = record("a : b", 100);
        assert_eq!(decode_legacy(&encode_legacy(&tricky)), None);
    }
}
