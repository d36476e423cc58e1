//! Daybook - per-day expense ledger
//!
//! Each calendar day owns one text file of `name : amount원` lines. This
//! library reads and rewrites those files, sums them into monthly totals and
//! compares the month against a configurable budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Day keys, amounts and expense records
//! - `codec`: Line formats for ledger files
//! - `storage`: Per-day text file storage
//! - `services`: Day view, monthly aggregation and budget logic
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON month exports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use daybook::config::DaybookPaths;
//! use daybook::models::{DayKey, ExpenseInput};
//! use daybook::services::ExpenseService;
//! use daybook::storage::Storage;
//!
//! let storage = Storage::open(DaybookPaths::new()?)?;
//! let view = ExpenseService::new(&storage)
//!     .add(DayKey::today(), ExpenseInput::from_raw("점심", "8000", None))?;
//! ```

pub mod audit;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{DaybookError, DaybookResult};

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DAYBOOK_LOG";

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing on stderr, filtered by `DAYBOOK_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("daybook=warn"));

        // A subscriber installed by the host wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        tracing::debug!("tracing initialized");
    });
}
