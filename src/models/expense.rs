//! Expense records and the input forms that produce them

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Won;
use crate::error::{DaybookError, DaybookResult};

/// A single expense: what was bought and what it cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Item name, trimmed and never empty
    pub name: String,

    /// Amount spent
    pub amount: Won,

    /// Optional category label (only kept by the tagged line format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExpenseRecord {
    /// Create a validated record
    pub fn new(name: impl Into<String>, amount: Won) -> DaybookResult<Self> {
        let record = Self {
            name: name.into().trim().to_string(),
            amount,
            category: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Attach a category; blank categories are dropped
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().trim().to_string();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    /// Check the record can be written as one ledger line
    pub fn validate(&self) -> DaybookResult<()> {
        if self.name.trim().is_empty() {
            return Err(DaybookError::Validation("Item name is required".into()));
        }
        if self.name.contains(['\n', '\r']) {
            return Err(DaybookError::Validation(
                "Item name must fit on one line".into(),
            ));
        }
        Ok(())
    }

    /// Same item and amount, ignoring category
    pub fn same_expense(&self, other: &ExpenseRecord) -> bool {
        self.name == other.name && self.amount == other.amount
    }

    /// Whether this record is one that a delete of `wanted` should remove
    ///
    /// Name and amount must agree. A category on `wanted` must agree too;
    /// without one, any category matches.
    pub fn matches_selector(&self, wanted: &ExpenseRecord) -> bool {
        self.same_expense(wanted)
            && wanted
                .category
                .as_ref()
                .map_or(true, |category| self.category.as_ref() == Some(category))
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.amount)
    }
}

/// What the add form hands back: either the two raw text fields or an
/// already-built record
#[derive(Debug, Clone)]
pub enum ExpenseInput {
    Raw {
        name: String,
        amount: String,
        category: Option<String>,
    },
    Record(ExpenseRecord),
}

impl ExpenseInput {
    /// Input from raw form fields
    pub fn from_raw(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self::Raw {
            name: name.into(),
            amount: amount.into(),
            category,
        }
    }

    /// Validate and convert into a record
    ///
    /// Empty fields are rejected before anything is parsed, so no partial
    /// record ever reaches the ledger.
    pub fn into_record(self) -> DaybookResult<ExpenseRecord> {
        match self {
            Self::Raw {
                name,
                amount,
                category,
            } => {
                if name.trim().is_empty() || amount.trim().is_empty() {
                    return Err(DaybookError::Validation(
                        "All fields are required".into(),
                    ));
                }

                let amount = Won::parse(&amount).map_err(|e| {
                    DaybookError::Validation(format!(
                        "Invalid amount '{}': {}. Use digits like '8000' or '8,000'",
                        amount.trim(),
                        e
                    ))
                })?;

                let record = ExpenseRecord::new(name, amount)?;
                Ok(match category {
                    Some(category) => record.with_category(category),
                    None => record,
                })
            }
            Self::Record(record) => {
                record.validate()?;
                Ok(record)
            }
        }
    }
}

impl From<ExpenseRecord> for ExpenseInput {
    fn from(record: ExpenseRecord) -> Self {
        Self::Record(record)
    }
}

/// A decoded ledger line; legacy lines have no id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub id: Option<EntryId>,
    pub record: ExpenseRecord,
}

impl LedgerEntry {
    /// Entry read from a line that carries no id
    pub fn untagged(record: ExpenseRecord) -> Self {
        Self { id: None, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let record = ExpenseRecord::new("  점심 ", Won::new(8000)).unwrap();
        assert_eq!(record.name, "점심");
        assert_eq!(record.to_string(), "점심 : 8,000원");
    }

    #[test]
    fn test_rejects_empty_and_multiline_names() {
        assert!(ExpenseRecord::new("   ", Won::new(1)).unwrap_err().is_validation());
        assert!(ExpenseRecord::new("a\nb", Won::new(1)).unwrap_err().is_validation());
    }

    #[test]
    fn test_blank_category_is_dropped() {
        let record = ExpenseRecord::new("커피", Won::new(4500))
            .unwrap()
            .with_category("  ");
        assert_eq!(record.category, None);

        let record = record.with_category(" 식비 ");
        assert_eq!(record.category.as_deref(), Some("식비"));
    }

    #[test]
    fn test_raw_input_requires_both_fields() {
        let err = ExpenseInput::from_raw("", "8000", None)
            .into_record()
            .unwrap_err();
        assert!(err.is_validation());

        let err = ExpenseInput::from_raw("점심", "  ", None)
            .into_record()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_raw_input_parses_grouped_amount() {
        let record = ExpenseInput::from_raw("커피", "4,500", Some("카페".into()))
            .into_record()
            .unwrap();
        assert_eq!(record.amount, Won::new(4500));
        assert_eq!(record.category.as_deref(), Some("카페"));
    }

    #[test]
    fn test_raw_input_rejects_non_numeric_amount() {
        let err = ExpenseInput::from_raw("택시", "팔천", None)
            .into_record()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_structured_input_is_validated() {
        let record = ExpenseRecord {
            name: String::new(),
            amount: Won::new(10),
            category: None,
        };
        assert!(ExpenseInput::from(record).into_record().is_err());
    }

    #[test]
    fn test_selector_category_must_agree() {
        let cafe = ExpenseRecord::new("커피", Won::new(4500))
            .unwrap()
            .with_category("카페");
        let food = cafe.clone().with_category("식비");
        let plain = ExpenseRecord::new("커피", Won::new(4500)).unwrap();

        assert!(cafe.matches_selector(&cafe));
        assert!(!food.matches_selector(&cafe));
        assert!(!plain.matches_selector(&cafe));
        assert!(food.matches_selector(&plain));
        assert!(plain.matches_selector(&plain));
    }

    #[test]
    fn test_same_expense_ignores_category() {
        let a = ExpenseRecord::new("커피", Won::new(4500)).unwrap();
        let b = a.clone().with_category("카페");
        assert!(a.same_expense(&b));
        assert_ne!(a, b);
    }
}
