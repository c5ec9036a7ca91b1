//! Look up KRX-listed companies and chart their daily prices.
//!
//! This is a facade crate that re-exports functionality from the krxchart
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use krxchart_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KrxClient::with_defaults()?;
//!     let dashboard = Dashboard::new(client.clone(), client);
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//!     )?;
//!
//!     let request = CycleRequest::new("삼성전자", range);
//!     if let CycleOutcome::Success(report) = dashboard.trigger(&request, |_| {}).await? {
//!         for artifact in report.artifacts() {
//!             artifact.write_to(std::path::Path::new("."))?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dashboard;

pub use dashboard::{
    CycleOutcome, CycleRequest, Dashboard, DashboardError, MISSING_IDENTIFIER, NO_DATA,
    PREVIEW_ROWS, Report, ShellState,
};

// Re-export core types
pub use krxchart_types::*;

// Re-export fetch functionality
pub use krxchart_fetch::{ClientConfig, FetchError, KrxClient, ListingSource, PriceSource};

// Re-export roster lookup
pub use krxchart_listing::{CompanyRoster, Lookup, ResolveError, TickerResolver};

// Re-export analytics
pub use krxchart_analytics::{FrameRow, Histogram, MA_WINDOWS, PriceFrame, ReturnStats};

// Re-export formatters
pub use krxchart_format::{
    Artifact, CsvFormatter, FormatError, Formatter, OutputFormat, XlsxFormatter,
};

// Re-export charts
pub use krxchart_chart::{ChartConfig, ChartError, ChartRenderer};

/// Prelude module for convenient imports.
///
/// ```
/// use krxchart_lib::prelude::*;
/// ```
pub mod prelude {
    pub use krxchart_types::{CompanyRecord, DateRange, DateRangeError, PriceBar, Ticker};

    pub use krxchart_fetch::{ClientConfig, KrxClient, ListingSource, PriceSource};

    pub use krxchart_listing::{Lookup, TickerResolver};

    pub use krxchart_analytics::{PriceFrame, ReturnStats};

    pub use krxchart_format::{Artifact, OutputFormat};

    pub use crate::{CycleOutcome, CycleRequest, Dashboard, DashboardError, Report, ShellState};
}
