//! Error types for krxchart core values.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for values that are not valid ticker codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The value is not exactly six ASCII digits.
    #[error("Invalid ticker code: {0:?} (expected 6 digits)")]
    Invalid(String),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
