//! Monthly aggregation over day files
//!
//! Every call walks each calendar day of the month and re-reads its file.
//! Nothing is cached; a month is at most 31 small files.

use tracing::{debug, warn};

use crate::codec;
use crate::error::DaybookResult;
use crate::models::{DayKey, MonthKey, Won};
use crate::storage::LedgerStore;

/// Totals for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: DayKey,
    pub total: Won,
    /// Lines that decoded and were counted
    pub entries: usize,
    /// Lines shown to the user but left out of the total
    pub skipped: usize,
}

/// Totals for one month, listing only days that have lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub days: Vec<DaySummary>,
    pub total: Won,
}

impl MonthSummary {
    /// Number of counted entries across the month
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| d.entries).sum()
    }

    /// Number of undecodable lines across the month
    pub fn skipped_lines(&self) -> usize {
        self.days.iter().map(|d| d.skipped).sum()
    }

    /// The day with the highest total, if any day has spending
    pub fn top_day(&self) -> Option<&DaySummary> {
        self.days
            .iter()
            .filter(|d| !d.total.is_zero())
            .max_by_key(|d| d.total)
    }
}

/// Sums expense amounts across the day files of a month
pub struct MonthlyAggregator<'a> {
    store: &'a LedgerStore,
}

impl<'a> MonthlyAggregator<'a> {
    /// Create a new aggregator
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Number of days in a month, leap years included
    pub fn days_in_month(year: i32, month: u32) -> DaybookResult<u32> {
        Ok(MonthKey::new(year, month)?.days_in_month())
    }

    /// Total spent in a month
    ///
    /// Missing days and undecodable lines contribute zero. Fails only for a
    /// month outside 1-12.
    pub fn monthly_total(&self, year: i32, month: u32) -> DaybookResult<Won> {
        Ok(self.total_for(MonthKey::new(year, month)?))
    }

    /// Total spent in `month`
    pub fn total_for(&self, month: MonthKey) -> Won {
        let total: Won = month.days().map(|day| self.day_total(&day)).sum();
        debug!(month = %month, total = %total, "aggregated month");
        total
    }

    /// Total spent on one day
    pub fn day_total(&self, day: &DayKey) -> Won {
        self.summarize_day(day).total
    }

    /// Per-day breakdown of a month
    pub fn month_summary(&self, month: MonthKey) -> MonthSummary {
        let candidates = self.store.days_in(month).unwrap_or_else(|e| {
            warn!(month = %month, error = %e, "could not list ledger files, scanning every day");
            month.days().collect()
        });
        let days: Vec<DaySummary> = candidates
            .iter()
            .map(|day| self.summarize_day(day))
            .filter(|summary| summary.entries + summary.skipped > 0)
            .collect();
        let total: Won = days.iter().map(|d| d.total).sum();

        MonthSummary { month, days, total }
    }

    fn summarize_day(&self, day: &DayKey) -> DaySummary {
        let mut summary = DaySummary {
            day: *day,
            total: Won::zero(),
            entries: 0,
            skipped: 0,
        };

        for line in self.store.read(day) {
            match codec::decode_line(&line) {
                Some(entry) => {
                    summary.total += entry.record.amount;
                    summary.entries += 1;
                }
                None => summary.skipped += 1,
            }
        }

        summary
    }
}
