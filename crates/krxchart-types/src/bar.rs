//! Daily price bar representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's OHLCV summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price of the day.
    pub high: f64,
    /// Lowest price of the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Number of shares traded.
    pub volume: u64,
}

impl PriceBar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if the bar closed at or above its open.
    ///
    /// Flat bars count as rising, matching how the chart colors them.
    #[must_use]
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_bar(open: f64, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        PriceBar::new(date, open, 79_800.0, 78_200.0, close, 17_142_847)
    }

    #[test]
    fn test_rising() {
        assert!(create_test_bar(78_200.0, 79_600.0).is_rising());
        assert!(create_test_bar(79_600.0, 79_600.0).is_rising());
        assert!(!create_test_bar(79_600.0, 78_200.0).is_rising());
    }
}
