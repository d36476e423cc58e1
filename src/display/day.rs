//! Day view formatting

use super::report::{format_budget_line, separator};
use crate::audit::AuditEntry;
use crate::services::DayView;

const WIDTH: usize = 40;

/// Format the list for one day followed by totals and the budget bar
pub fn format_day_view(view: &DayView) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", view.day));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if view.is_empty() {
        output.push_str("No expenses for this day.\n");
    }

    for line in &view.lines {
        let id = line
            .entry
            .as_ref()
            .and_then(|e| e.id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!("{:>3}  {:<12}  {}", line.index + 1, id, line.display()));
        if let Some(category) = line.entry.as_ref().and_then(|e| e.record.category.as_deref()) {
            output.push_str(&format!("  [{}]", category));
        }
        if !line.is_decoded() {
            output.push_str("  (not counted)");
        }
        output.push('\n');
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("Day total:   {}\n", view.day_total()));
    output.push_str(&format!("Month total: {}\n", view.month_total));
    output.push_str(&format_budget_line(&view.budget));
    output.push('\n');
    output
}

/// Format audit entries one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}
