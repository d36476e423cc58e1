//! Core data models for Daybook
//!
//! Expense records, won amounts, calendar keys and entry ids.

pub mod day;
pub mod expense;
pub mod ids;
pub mod money;

pub use day::{DayKey, MonthKey};
pub use expense::{ExpenseInput, ExpenseRecord, LedgerEntry};
pub use ids::EntryId;
pub use money::{Won, WonParseError};
