//! Daily price payload parsing.
//!
//! The chart endpoint answers with a JavaScript array literal rather than
//! strict JSON:
//!
//! ```text
//! [['날짜', '시가', '고가', '저가', '종가', '거래량', '외국인소진율'],
//! ["20240102", 78200, 79800, 78200, 79600, 17142847, 53.3],
//! ...
//! ]
//! ```
//!
//! The first row is a header; every other row is one trading day.

use chrono::NaiveDate;
use krxchart_types::PriceBar;
use serde_json::Value;
use thiserror::Error;

/// Minimum number of columns in a data row (date + OHLCV).
const MIN_COLUMNS: usize = 6;

/// Errors that can occur while parsing the price payload.
#[derive(Error, Debug)]
pub enum PriceParseError {
    /// The payload is not a nested array.
    #[error("Malformed price payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A data row could not be interpreted.
    #[error("Invalid price row {index}: {reason}")]
    Row {
        /// Zero-based row index within the payload.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Parses the chart payload into bars sorted by ascending date.
///
/// A payload holding only the header row (or nothing at all) yields an
/// empty vector.
///
/// # Errors
///
/// Returns an error if the payload is not a nested array or a data row is
/// missing columns or has non-numeric prices.
pub fn parse_prices(payload: &str) -> Result<Vec<PriceBar>, PriceParseError> {
    let normalized = payload.trim().replace('\'', "\"");
    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<Vec<Value>> = serde_json::from_str(&normalized)?;
    let mut bars = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if index == 0 && is_header(row) {
            continue;
        }
        bars.push(parse_row(index, row)?);
    }

    bars.sort_by_key(|bar| bar.date);
    Ok(bars)
}

fn is_header(row: &[Value]) -> bool {
    row.first()
        .and_then(Value::as_str)
        .is_some_and(|s| NaiveDate::parse_from_str(s.trim(), "%Y%m%d").is_err())
}

fn parse_row(index: usize, row: &[Value]) -> Result<PriceBar, PriceParseError> {
    let invalid = |reason: String| PriceParseError::Row { index, reason };

    if row.len() < MIN_COLUMNS {
        return Err(invalid(format!(
            "expected at least {MIN_COLUMNS} columns, got {}",
            row.len()
        )));
    }

    let raw_date = row[0]
        .as_str()
        .ok_or_else(|| invalid("date is not a string".to_string()))?;
    let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y%m%d")
        .map_err(|e| invalid(format!("bad date {raw_date:?}: {e}")))?;

    let number = |col: usize, name: &str| {
        row[col]
            .as_f64()
            .ok_or_else(|| invalid(format!("{name} is not a number")))
    };

    let open = number(1, "open")?;
    let high = number(2, "high")?;
    let low = number(3, "low")?;
    let close = number(4, "close")?;
    let volume = match row[5].as_u64() {
        Some(v) => v,
        None => number(5, "volume")?.max(0.0).round() as u64,
    };

    Ok(PriceBar::new(date, open, high, low, close, volume))
}
