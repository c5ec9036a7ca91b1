//! Company roster lookup and ticker resolution for krxchart.
//!
//! # Example
//!
//! ```ignore
//! use krxchart_fetch::KrxClient;
//! use krxchart_listing::TickerResolver;
//!
//! let resolver = TickerResolver::new(KrxClient::with_defaults()?);
//! let ticker = resolver.resolve("삼성전자").await?;
//! assert_eq!(ticker.as_str(), "005930");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/krxchart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod resolver;
mod roster;

pub use resolver::{Lookup, ResolveError, TickerResolver};
pub use roster::CompanyRoster;
