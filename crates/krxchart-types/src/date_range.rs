//! Inclusive date ranges.

use chrono::{Datelike, NaiveDate};

use crate::DateRangeError;

/// Compact date format used by the price provider (`YYYYMMDD`).
const COMPACT_FORMAT: &str = "%Y%m%d";

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Creates the range from January 1 of `today`'s year through `today`.
    #[must_use]
    pub fn year_to_date(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self { start, end: today }
    }

    /// Returns the start date as `YYYYMMDD`.
    #[must_use]
    pub fn start_compact(&self) -> String {
        self.start.format(COMPACT_FORMAT).to_string()
    }

    /// Returns the end date as `YYYYMMDD`.
    #[must_use]
    pub fn end_compact(&self) -> String {
        self.end.format(COMPACT_FORMAT).to_string()
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
