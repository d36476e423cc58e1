//! Month report, export and history commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_history, format_month_report};
use crate::error::{DaybookError, DaybookResult};
use crate::export::{export_month_csv, export_month_json, ExportFormat};
use crate::models::{DayKey, MonthKey};
use crate::services::{BudgetTracker, ExpenseService, MonthlyAggregator};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-day totals for a month
    Month {
        /// Month (e.g. "2024-07", "current", "last"), defaults to current
        month: Option<String>,
    },

    /// Export a month's entries
    Export {
        /// Month (e.g. "2024-07"), defaults to current
        month: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent adds, deletes and budget changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
        /// Only changes to this day (YYYY-MM-DD or "today")
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> DaybookResult<()> {
    match cmd {
        ReportCommands::Month { month } => {
            let month = parse_month(month.as_deref())?;
            let summary = MonthlyAggregator::new(&storage.ledger).month_summary(month);
            let status = BudgetTracker::new(storage).status(month);
            print!("{}", format_month_report(&summary, &status));
        }

        ReportCommands::Export {
            month,
            format,
            output,
        } => {
            let month = parse_month(month.as_deref())?;

            let count = match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        DaybookError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    let mut writer = BufWriter::new(file);
                    let count = write_export(storage, month, format, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| DaybookError::Export(e.to_string()))?;
                    count
                }
                None => write_export(storage, month, format, &mut io::stdout().lock())?,
            };

            if let Some(path) = output {
                println!("Exported {} entries to {}", count, path.display());
            }
        }

        ReportCommands::History { count, date } => {
            let day = date.as_deref().map(DayKey::parse).transpose()?;
            let entries = ExpenseService::new(storage).history(day, count)?;
            print!("{}", format_history(&entries));
        }
    }

    Ok(())
}

fn parse_month(month: Option<&str>) -> DaybookResult<MonthKey> {
    month.map_or_else(|| Ok(MonthKey::current()), MonthKey::parse)
}

fn write_export<W: Write>(
    storage: &Storage,
    month: MonthKey,
    format: ExportFormat,
    writer: &mut W,
) -> DaybookResult<usize> {
    match format {
        ExportFormat::Csv => export_month_csv(&storage.ledger, month, writer),
        ExportFormat::Json => export_month_json(&storage.ledger, month, writer),
    }
}
