//! Spreadsheet and CSV exporters for krxchart.
//!
//! This crate provides formatters for writing a [`PriceFrame`] with its
//! derived columns:
//!
//! - [`XlsxFormatter`] - Single-sheet Excel workbook
//! - [`CsvFormatter`] - CSV format
//! - [`Artifact`] - Exported bytes with download metadata
//!
//! [`PriceFrame`]: krxchart_analytics::PriceFrame

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod artifact;
mod formatter;

#[cfg(feature = "csv")]
mod csv;

#[cfg(feature = "xlsx")]
mod xlsx;

pub use artifact::{Artifact, SVG_MIME, XLSX_MIME, file_stem};
pub use formatter::{COLUMNS, FormatError, Formatter, OutputFormat};

#[cfg(feature = "csv")]
pub use crate::csv::CsvFormatter;

#[cfg(feature = "xlsx")]
pub use crate::xlsx::{SHEET_NAME, XlsxFormatter};
