//! Chart rendering for krxchart.
//!
//! - [`ChartRenderer::price_chart`] - Candlesticks, moving averages and volume
//! - [`ChartRenderer::return_histogram`] - Daily-return distribution
//! - [`ChartConfig`] - Canvas sizes and colors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod histogram;
mod price;

pub use config::{ChartConfig, ChartRenderer};
pub use error::ChartError;
pub use histogram::{COUNT_AXIS, HISTOGRAM_TITLE, RETURN_AXIS, STD_BAND};
pub use plotters::style::RGBColor;

/// Font family used for every caption and label.
const FONT: &str = "sans-serif";
