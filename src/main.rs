use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use daybook::cli::{
    handle_budget_command, handle_expense_command, handle_report_command, notification,
    BudgetCommands, ExpenseCommands, ReportCommands,
};
use daybook::codec::LineFormat;
use daybook::config::DaybookPaths;
use daybook::storage::Storage;
use daybook::DaybookError;

#[derive(Parser)]
#[command(
    name = "daybook",
    author = "Kaylee Beyene",
    version,
    about = "Per-day expense ledger with monthly totals and budget tracking",
    long_about = "Daybook keeps one small text file of expenses per day, adds them \
                  up by month and shows how much of your monthly budget is spent."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths
    Config {
        /// Format used for new ledger lines
        #[arg(long, value_enum)]
        line_format: Option<LineFormat>,
    },
}

fn main() -> ExitCode {
    daybook::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DaybookError>() {
                Some(e) => eprintln!("{}", notification(e)),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = DaybookPaths::new().context("Could not determine data directory")?;
    let mut storage = Storage::open(paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, cmd)?,
        Some(Commands::Config { line_format }) => {
            if let Some(format) = line_format {
                storage.update_settings(|s| s.line_format = format)?;
                println!("New entries will be written as {}", format);
                println!();
            }

            let paths = storage.paths();
            let settings = storage.settings();
            println!("Daybook Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger directory: {}", paths.ledger_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Monthly budget: {}", settings.max_budget);
            println!("  Line format:    {}", settings.line_format);
        }
        None => {
            println!("Daybook - per-day expense ledger");
            println!();
            println!("Run 'daybook --help' for usage information.");
            println!("Run 'daybook show' to see today's expenses.");
        }
    }

    Ok(())
}
