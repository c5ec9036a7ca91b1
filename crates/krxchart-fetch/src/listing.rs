//! Listed-company roster decoding and HTML table parsing.

use krxchart_types::{CompanyRecord, Ticker};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Header of the company-name column.
pub const NAME_HEADER: &str = "회사명";

/// Header of the ticker-code column.
pub const CODE_HEADER: &str = "종목코드";

/// Errors that can occur while decoding or parsing the roster table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingParseError {
    /// The body is not valid EUC-KR.
    #[error("Roster is not valid EUC-KR text")]
    Encoding,

    /// No `<table>` element in the document.
    #[error("No table found in roster document")]
    NoTable,

    /// The table has no header row.
    #[error("Roster table has no header row")]
    NoHeader,

    /// A required column is missing from the header row.
    #[error("Roster table has no {0:?} column")]
    MissingColumn(&'static str),

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Decodes the raw roster body from EUC-KR.
///
/// # Errors
///
/// Returns an error if the bytes contain sequences that are not valid
/// EUC-KR (code page 949).
pub fn decode_listing(bytes: &[u8]) -> Result<String, ListingParseError> {
    let (text, _, had_errors) = encoding_rs::EUC_KR.decode(bytes);
    if had_errors {
        return Err(ListingParseError::Encoding);
    }
    Ok(text.into_owned())
}

/// Parses the first HTML table of the roster document.
///
/// Only the company-name and ticker-code columns are kept. Codes are
/// zero-padded to six digits; rows whose code is not numeric are skipped.
/// Rows are returned in document order.
///
/// # Errors
///
/// Returns an error if there is no table, no header row, or either
/// required column is missing.
pub fn parse_listing(html: &str) -> Result<Vec<CompanyRecord>, ListingParseError> {
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("th, td")?;

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ListingParseError::NoTable)?;

    let mut rows = table.select(&row_selector);
    let header: Vec<String> = rows
        .next()
        .ok_or(ListingParseError::NoHeader)?
        .select(&cell_selector)
        .map(cell_text)
        .collect();

    let name_idx = column_index(&header, NAME_HEADER)?;
    let code_idx = column_index(&header, CODE_HEADER)?;

    let mut records = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        let (Some(name), Some(code)) = (cells.get(name_idx), cells.get(code_idx)) else {
            continue;
        };

        match Ticker::normalize(code) {
            Ok(code) => records.push(CompanyRecord::new(name.as_str(), code)),
            Err(e) => tracing::debug!(name = %name, error = %e, "skipping roster row"),
        }
    }

    Ok(records)
}

fn selector(css: &'static str) -> Result<Selector, ListingParseError> {
    Selector::parse(css).map_err(|e| ListingParseError::Selector(e.to_string()))
}

fn column_index(header: &[String], column: &'static str) -> Result<usize, ListingParseError> {
    header
        .iter()
        .position(|h| h == column)
        .ok_or(ListingParseError::MissingColumn(column))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
