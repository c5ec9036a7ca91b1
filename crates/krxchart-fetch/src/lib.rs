//! HTTP client and payload parsing for the krxchart KRX price dashboard.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`url`] - Endpoint constants and price URL construction
//! - [`KrxClient`] - HTTP client for the roster and price endpoints
//! - [`decode_listing`] / [`parse_listing`] - EUC-KR roster table parsing
//! - [`parse_prices`] - Daily chart payload parsing
//! - [`ListingSource`] / [`PriceSource`] - Traits the resolver and
//!   dashboard are generic over

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod listing;
mod prices;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, KrxClient};
pub use listing::{CODE_HEADER, ListingParseError, NAME_HEADER, decode_listing, parse_listing};
pub use prices::{PriceParseError, parse_prices};
pub use source::{ListingSource, PriceSource};
