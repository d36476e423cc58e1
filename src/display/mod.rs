//! Display formatting for terminal output

pub mod day;
pub mod report;

pub use day::{format_day_view, format_history};
pub use report::{format_bar, format_budget_line, format_month_report};
