//! Calendar keys for the ledger
//!
//! A `DayKey` names one ledger file; a `MonthKey` names the set of days the
//! monthly total runs over.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DaybookError, DaybookResult};

/// Extension of every ledger file
pub const LEDGER_EXTENSION: &str = "txt";

/// A calendar day identifying one ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DayKey {
    /// Create a key, rejecting dates that do not exist (e.g. Feb 30)
    pub fn new(year: i32, month: u32, day: u32) -> DaybookResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or_else(|| DaybookError::InvalidDate(format!("{}-{}-{}", year, month, day)))
    }

    /// Create a key from a chrono date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Today in local time
    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The month this day belongs to
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }

    /// The key as a chrono date
    pub fn date(&self) -> NaiveDate {
        // Fields are only ever set from a valid NaiveDate.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Next calendar day; fails past the last representable date
    pub fn succ(&self) -> DaybookResult<Self> {
        self.date()
            .succ_opt()
            .map(Self::from_date)
            .ok_or_else(|| DaybookError::InvalidDate(format!("no day after {}", self)))
    }

    /// Previous calendar day; fails before the first representable date
    pub fn pred(&self) -> DaybookResult<Self> {
        self.date()
            .pred_opt()
            .map(Self::from_date)
            .ok_or_else(|| DaybookError::InvalidDate(format!("no day before {}", self)))
    }

    /// File stem without zero padding, e.g. `2024_7_3`
    pub fn file_stem(&self) -> String {
        format!("{}_{}_{}", self.year, self.month, self.day)
    }

    /// File name, e.g. `2024_7_3.txt`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), LEDGER_EXTENSION)
    }

    /// Recover a key from a ledger file name; `None` for foreign files
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(LEDGER_EXTENSION)?.strip_suffix('.')?;
        Self::from_stem(stem)
    }

    fn from_stem(stem: &str) -> Option<Self> {
        let mut parts = stem.split('_');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Self::new(year, month, day).ok()
    }

    /// Parse user input
    ///
    /// Formats:
    /// - "today"
    /// - "2024-07-30"
    /// - "2024_7_30" (file stem)
    pub fn parse(s: &str) -> DaybookResult<Self> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::today());
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }

        Self::from_stem(s).ok_or_else(|| {
            DaybookError::InvalidDate(format!("'{}'. Use YYYY-MM-DD or 'today'", s))
        })
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; month must be 1-12
    pub fn new(year: i32, month: u32) -> DaybookResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DaybookError::InvalidDate(format!(
                "month {} is outside 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The current month in local time
    pub fn current() -> Self {
        DayKey::today().month_key()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days, leap years included
    pub fn days_in_month(&self) -> u32 {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Every day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = DayKey> {
        let Self { year, month } = *self;
        (1..=self.days_in_month()).filter_map(move |day| DayKey::new(year, month, day).ok())
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse "2024-07", "current" or "last"
    pub fn parse(s: &str) -> DaybookResult<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "current" | "this" => return Ok(Self::current()),
            "last" | "prev" => return Ok(Self::current().prev()),
            _ => {}
        }

        let invalid = || DaybookError::InvalidDate(format!("'{}'. Use YYYY-MM", s));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(DayKey::new(2024, 2, 29).is_ok());
        assert!(DayKey::new(2023, 2, 29).is_err());
        assert!(DayKey::new(2024, 13, 1).is_err());
        assert!(DayKey::new(2024, 4, 31).is_err());
        assert!(DayKey::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_file_name() {
        let day = DayKey::new(2024, 7, 30).unwrap();
        assert_eq!(day.file_stem(), "2024_7_30");
        assert_eq!(day.file_name(), "2024_7_30.txt");
        assert_eq!(DayKey::new(2024, 1, 5).unwrap().file_name(), "2024_1_5.txt");
    }

    #[test]
    fn test_from_file_name() {
        let day = DayKey::from_file_name("2024_7_30.txt").unwrap();
        assert_eq!(day, DayKey::new(2024, 7, 30).unwrap());

        assert!(DayKey::from_file_name("2024_7_30.txt.tmp").is_none());
        assert!(DayKey::from_file_name("notes.txt").is_none());
        assert!(DayKey::from_file_name("2024_2_30.txt").is_none());
        assert!(DayKey::from_file_name("2024_7_30_1.txt").is_none());
    }

    #[test]
    fn test_parse() {
        let expected = DayKey::new(2024, 7, 30).unwrap();
        assert_eq!(DayKey::parse("2024-07-30").unwrap(), expected);
        assert_eq!(DayKey::parse("2024_7_30").unwrap(), expected);
        assert_eq!(DayKey::parse("today").unwrap(), DayKey::today());
        assert!(DayKey::parse("30/07/2024").is_err());
    }

    #[test]
    fn test_navigation_crosses_month_boundary() {
        let day = DayKey::new(2024, 7, 31).unwrap();
        assert_eq!(day.succ().unwrap(), DayKey::new(2024, 8, 1).unwrap());
        assert_eq!(day.succ().unwrap().pred().unwrap(), day);
        assert_eq!(
            DayKey::new(2024, 1, 1).unwrap().pred().unwrap(),
            DayKey::new(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_navigation_stops_at_calendar_limits() {
        let last = DayKey::from_date(NaiveDate::MAX);
        let first = DayKey::from_date(NaiveDate::MIN);

        assert!(matches!(last.succ(), Err(DaybookError::InvalidDate(_))));
        assert!(matches!(first.pred(), Err(DaybookError::InvalidDate(_))));
        assert_eq!(last.pred().unwrap().succ().unwrap(), last);
    }

    #[test]
    fn test_display() {
        assert_eq!(DayKey::new(2024, 7, 3).unwrap().to_string(), "2024-07-03");
        assert_eq!(MonthKey::new(2024, 7).unwrap().to_string(), "2024-07");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthKey::new(2024, 1).unwrap().days_in_month(), 31);
        assert_eq!(MonthKey::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(MonthKey::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_month_days_iterates_in_order() {
        let month = MonthKey::new(2024, 2).unwrap();
        let days: Vec<_> = month.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], DayKey::new(2024, 2, 1).unwrap());
        assert_eq!(days[28], DayKey::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_month_parse_and_navigation() {
        let month = MonthKey::parse("2024-12").unwrap();
        assert_eq!(month.next(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(month.next().prev(), month);
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("July").is_err());
        assert_eq!(MonthKey::parse("current").unwrap(), MonthKey::current());
    }
}
