//! CSV output format.

use krxchart_analytics::PriceFrame;
use std::io::Write;

use crate::{COLUMNS, FormatError, Formatter};

/// Field delimiter.
const DELIMITER: char = ',';

/// CSV formatter.
#[derive(Debug, Clone, Copy)]
pub struct CsvFormatter {
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Formatter for CsvFormatter {
    fn write_frame<W: Write + Send>(
        &self,
        frame: &PriceFrame,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = DELIMITER;

        if self.include_header {
            writeln!(writer, "{}", COLUMNS.join(&d.to_string()))?;
        }

        for row in frame.rows() {
            let bar = row.bar;
            let [ma5, ma20, ma120] = row.moving_averages;
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.date.format("%Y-%m-%d"),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume,
                optional(ma5),
                optional(ma20),
                optional(ma120),
                optional(row.daily_return),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use krxchart_types::PriceBar;

    fn create_test_frame() -> PriceFrame {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = [100.0, 110.0, 99.0, 101.0, 102.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new(start + Days::new(i as u64), c, c, c, c, 500))
            .collect();
        PriceFrame::new(bars)
    }

    #[test]
    fn test_csv_frame() {
        let output = CsvFormatter::new().to_bytes(&create_test_frame()).unwrap();
        let result = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Date,Open,High,Low,Close,Volume,MA5,MA20,MA120,DailyReturn");
        assert_eq!(lines[1], "2024-01-02,100,100,100,100,500,,,,");
        assert!(lines[2].starts_with("2024-01-03,110,110,110,110,500,,,,10"));
        assert!(lines[5].starts_with("2024-01-06,102,102,102,102,500,102.4,,,"));
    }

    #[test]
    fn test_csv_no_header() {
        let output = CsvFormatter::new()
            .with_header(false)
            .to_bytes(&create_test_frame())
            .unwrap();
        let result = String::from_utf8(output).unwrap();
        assert!(!result.contains("Date,Open"));
    }
}
