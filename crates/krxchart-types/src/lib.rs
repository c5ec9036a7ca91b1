//! Core types for the krxchart KRX price dashboard.
//!
//! This crate provides the fundamental data structures used throughout krxchart:
//!
//! - [`Ticker`] - A 6-digit, zero-padded exchange code
//! - [`CompanyRecord`] - One row of the listed-company roster
//! - [`PriceBar`] - A daily OHLCV bar
//! - [`DateRange`] - Inclusive date range for price retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod company;
mod date_range;
mod error;
mod ticker;

pub use bar::PriceBar;
pub use company::CompanyRecord;
pub use date_range::DateRange;
pub use error::{DateRangeError, TickerError};
pub use ticker::Ticker;
