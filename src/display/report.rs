//! Month report and budget bar formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::services::{BudgetStatus, MonthSummary};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Skipped")]
    skipped: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Progress bar for a 0-100 percentage
pub fn format_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `12,500원 / 500,000원` plus a bar and percentage
pub fn format_budget_line(status: &BudgetStatus) -> String {
    let mut line = format!(
        "{} / {}\n[{}] {}%",
        status.spent,
        status.max_budget,
        format_bar(status.display_percent(), BAR_WIDTH),
        status.percent()
    );
    if status.is_over() {
        line.push_str("  over budget");
    }
    line
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Per-day table for a month with the grand total and budget bar
pub fn format_month_report(summary: &MonthSummary, status: &BudgetStatus) -> String {
    let mut output = format!("Expenses for {}\n", summary.month);

    if summary.days.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        let rows: Vec<DayRow> = summary
            .days
            .iter()
            .map(|d| DayRow {
                date: d.day.to_string(),
                entries: d.entries,
                skipped: d.skipped,
                total: d.total.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "Month total: {} ({} entries",
        summary.total,
        summary.entry_count()
    ));
    if summary.skipped_lines() > 0 {
        output.push_str(&format!(", {} unreadable lines skipped", summary.skipped_lines()));
    }
    output.push_str(")\n");

    if let Some(top) = summary.top_day() {
        output.push_str(&format!("Highest day: {} ({})\n", top.day, top.total));
    }

    output.push_str(&format_budget_line(status));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayKey, MonthKey, Won};
    use crate::services::DaySummary;

    fn status(spent: u64, max: u64) -> BudgetStatus {
        BudgetStatus {
            spent: Won::new(spent),
            max_budget: Won::new(max),
        }
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0, 4), "░░░░");
        assert_eq!(format_bar(100, 4), "████");
    }

    #[test]
    fn test_budget_line() {
        let line = format_budget_line(&status(12_500, 500_000));
        assert!(line.starts_with("12,500원 / 500,000원"));
        assert!(line.ends_with("2%"));

        let line = format_budget_line(&status(600_000, 500_000));
        assert!(line.contains("120%"));
        assert!(line.contains("over budget"));
    }

    #[test]
    fn test_month_report() {
        let summary = MonthSummary {
            month: MonthKey::new(2024, 7).unwrap(),
            days: vec![DaySummary {
                day: DayKey::new(2024, 7, 30).unwrap(),
                total: Won::new(12_500),
                entries: 2,
                skipped: 1,
            }],
            total: Won::new(12_500),
        };

        let report = format_month_report(&summary, &status(12_500, 500_000));
        assert!(report.contains("Expenses for 2024-07"));
        assert!(report.contains("2024-07-30"));
        assert!(report.contains("Month total: 12,500원 (2 entries, 1 unreadable lines skipped)"));
        assert!(report.contains("Highest day: 2024-07-30"));
    }

    #[test]
    fn test_empty_month_report() {
        let summary = MonthSummary {
            month: MonthKey::new(2024, 7).unwrap(),
            days: Vec::new(),
            total: Won::zero(),
        };

        let report = format_month_report(&summary, &status(0, 500_000));
        assert!(report.contains("No expenses recorded."));
        assert!(!report.contains("Highest day"));
    }
}
