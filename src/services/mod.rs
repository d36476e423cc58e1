//! Service layer for Daybook
//!
//! The business logic between the CLI and storage: monthly aggregation,
//! budget tracking and the add/delete/view flow.

pub mod aggregator;
pub mod budget;
pub mod expense;

pub use aggregator::{DaySummary, MonthSummary, MonthlyAggregator};
pub use budget::{parse_budget_input, set_max_budget, BudgetStatus, BudgetTracker};
pub use expense::{DayView, DeleteSelector, ExpenseService};
