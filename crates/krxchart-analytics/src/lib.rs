//! Moving averages, daily returns and return statistics for krxchart.
//!
//! This crate derives everything the dashboard displays from a bar series:
//!
//! - [`moving_average`] - Trailing simple moving average
//! - [`daily_returns`] - Close-over-close percentage change
//! - [`ReturnStats`] - Mean, sample standard deviation and extremes
//! - [`Histogram`] - Fixed-width return distribution
//! - [`PriceFrame`] - Bars plus all derived columns

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod frame;
mod histogram;
mod moving_average;
mod returns;

pub use frame::{FrameRow, MA_WINDOWS, PriceFrame};
pub use histogram::{Bin, Histogram, RETURN_BIN_WIDTH};
pub use moving_average::moving_average;
pub use returns::{ReturnStats, daily_returns, pct_change};
