//! Day-level CLI commands
//!
//! Every command prints the refreshed day afterwards.

use clap::Subcommand;

use crate::display::format_day_view;
use crate::error::{DaybookError, DaybookResult};
use crate::models::{DayKey, ExpenseInput, ExpenseRecord, Won};
use crate::services::{DeleteSelector, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Show the expenses of a day with the month total and budget bar
    Show {
        /// Date (YYYY-MM-DD or "today")
        #[arg(default_value = "today")]
        date: String,
        /// Show the day before DATE
        #[arg(long, conflicts_with = "next")]
        prev: bool,
        /// Show the day after DATE
        #[arg(long)]
        next: bool,
    },

    /// Add an expense
    Add {
        /// Item name
        name: String,
        /// Amount in won (e.g. "8000" or "8,000")
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete one expense, by id, by line number or by name and amount
    #[command(alias = "rm")]
    Delete {
        /// Item name (with AMOUNT)
        name: Option<String>,
        /// Amount (with NAME)
        amount: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Entry id as listed (e.g. exp-1a2b3c4d)
        #[arg(long, conflicts_with_all = ["name", "index"])]
        id: Option<String>,
        /// Line number as listed (1-based)
        #[arg(short = 'n', long, conflicts_with = "name")]
        index: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> DaybookResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Show { date, prev, next } => {
            let mut day = DayKey::parse(&date)?;
            if prev {
                day = day.pred()?;
            } else if next {
                day = day.succ()?;
            }
            print!("{}", format_day_view(&service.day_view(day)));
        }

        ExpenseCommands::Add {
            name,
            amount,
            date,
            category,
        } => {
            let day = DayKey::parse(&date)?;
            let view = service.add(day, ExpenseInput::from_raw(name, amount, category))?;
            println!("Added.");
            print!("{}", format_day_view(&view));
        }

        ExpenseCommands::Delete {
            name,
            amount,
            date,
            id,
            index,
        } => {
            let day = DayKey::parse(&date)?;
            let selector = match (id, index, name, amount) {
                (Some(id), _, _, _) => DeleteSelector::Id(service.resolve_id(day, &id)?),
                (None, Some(0), _, _) => {
                    return Err(DaybookError::Validation(
                        "Line numbers start at 1".into(),
                    ))
                }
                (None, Some(n), _, _) => DeleteSelector::Index(n - 1),
                (None, None, Some(name), Some(amount)) => {
                    let amount = Won::parse(&amount).map_err(|e| {
                        DaybookError::Validation(format!("Invalid amount '{}': {}", amount, e))
                    })?;
                    DeleteSelector::Record(ExpenseRecord::new(name, amount)?)
                }
                _ => {
                    return Err(DaybookError::Validation(
                        "Give --id, --index, or NAME and AMOUNT".into(),
                    ))
                }
            };

            let view = service.delete(day, selector)?;
            println!("Deleted.");
            print!("{}", format_day_view(&view));
        }
    }

    Ok(())
}
