//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_budget_line;
use crate::error::DaybookResult;
use crate::models::MonthKey;
use crate::services::{parse_budget_input, set_max_budget, BudgetTracker};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending against the budget
    Show {
        /// Month (e.g. "2024-07", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the monthly budget
    Set {
        /// Amount in won (e.g. "300000" or "300,000")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &mut Storage, cmd: BudgetCommands) -> DaybookResult<()> {
    match cmd {
        BudgetCommands::Show { month } => {
            let month = match month {
                Some(m) => MonthKey::parse(&m)?,
                None => MonthKey::current(),
            };
            let status = BudgetTracker::new(storage).status(month);

            println!("Budget for {}", month);
            println!("{}", format_budget_line(&status));
            println!("Remaining: {}", status.remaining());
        }

        BudgetCommands::Set { amount } => match parse_budget_input(&amount)? {
            Some(amount) => {
                let previous = set_max_budget(storage, amount)?;
                println!("Budget changed: {} -> {}", previous, amount);
            }
            None => println!("Budget unchanged: {}", storage.settings().max_budget),
        },
    }

    Ok(())
}
