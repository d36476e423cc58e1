//! Audit logging for Daybook
//!
//! Every add, delete and budget change is appended to `audit.log` as one
//! JSON line, so a day's history can be reconstructed even though ledger
//! rewrites drop deleted lines.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
