//! Free-text to ticker resolution.

use krxchart_fetch::{FetchError, ListingSource};
use krxchart_types::{CompanyRecord, Ticker};
use thiserror::Error;

use crate::CompanyRoster;

/// Errors that can occur while resolving a ticker.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No roster entry has exactly this name.
    #[error("'{input}' was not found. Try entering the 6-digit ticker code directly.")]
    NotFound {
        /// The unmatched input.
        input: String,
    },

    /// The roster could not be retrieved.
    #[error("Failed to load the listed-company roster: {0}")]
    Listing(#[from] FetchError),
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// The resolved ticker.
    pub ticker: Ticker,
    /// The roster entry that supplied the ticker, if the roster was consulted.
    pub matched: Option<CompanyRecord>,
    /// Further roster entries sharing the same name, in roster order.
    pub alternatives: Vec<CompanyRecord>,
}

impl Lookup {
    /// Returns true if more than one company carries the looked-up name.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// Resolves company names or codes to tickers.
///
/// Inputs that are already six ASCII digits are returned unchanged without
/// touching the roster. Everything else triggers one roster download and an
/// exact name match.
#[derive(Debug, Clone)]
pub struct TickerResolver<L> {
    source: L,
}

impl<L: ListingSource> TickerResolver<L> {
    /// Creates a resolver backed by the given roster source.
    #[must_use]
    pub const fn new(source: L) -> Self {
        Self { source }
    }

    /// Returns the roster source.
    #[must_use]
    pub const fn source(&self) -> &L {
        &self.source
    }

    /// Resolves `input` to a ticker, first match wins.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if no company has exactly this
    /// name, or [`ResolveError::Listing`] if the roster cannot be fetched.
    pub async fn resolve(&self, input: &str) -> Result<Ticker, ResolveError> {
        self.lookup(input).await.map(|lookup| lookup.ticker)
    }

    /// Resolves `input`, also reporting other companies with the same name.
    ///
    /// # Errors
    ///
    /// See [`TickerResolver::resolve`].
    pub async fn lookup(&self, input: &str) -> Result<Lookup, ResolveError> {
        if let Ok(ticker) = Ticker::parse(input) {
            tracing::debug!(%ticker, "input is already a ticker code");
            return Ok(Lookup {
                ticker,
                matched: None,
                alternatives: Vec::new(),
            });
        }

        let roster = self.roster().await?;
        let mut matches = roster.matches(input).cloned();
        let Some(first) = matches.next() else {
            return Err(ResolveError::NotFound {
                input: input.to_string(),
            });
        };
        let alternatives: Vec<CompanyRecord> = matches.collect();

        if !alternatives.is_empty() {
            tracing::warn!(
                name = input,
                chosen = %first.code,
                others = alternatives.len(),
                "company name is ambiguous, using first roster entry"
            );
        }

        Ok(Lookup {
            ticker: first.code.clone(),
            matched: Some(first),
            alternatives,
        })
    }

    /// Downloads a fresh copy of the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Listing`] if the roster cannot be fetched.
    pub async fn roster(&self) -> Result<CompanyRoster, ResolveError> {
        Ok(CompanyRoster::new(self.source.fetch_listing().await?))
    }
}
