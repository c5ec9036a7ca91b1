//! Output format abstraction.

use krxchart_analytics::PriceFrame;
use std::io::Write;
use thiserror::Error;

/// Column headers shared by every exporter, in output order.
pub const COLUMNS: [&str; 10] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "MA5",
    "MA20",
    "MA120",
    "DailyReturn",
];

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Excel workbook.
    #[default]
    Xlsx,
    /// CSV format.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    /// Returns the MIME type offered with downloads of this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Xlsx => crate::XLSX_MIME,
            Self::Csv => "text/csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook generation error.
    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes the frame, including derived columns, to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_frame<W: Write + Send>(&self, frame: &PriceFrame, writer: W)
    -> Result<(), FormatError>;

    /// Renders the frame into an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn to_bytes(&self, frame: &PriceFrame) -> Result<Vec<u8>, FormatError> {
        let mut buf = Vec::new();
        self.write_frame(frame, &mut buf)?;
        Ok(buf)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
