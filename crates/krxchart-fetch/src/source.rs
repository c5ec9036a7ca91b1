//! Data source abstractions.

use async_trait::async_trait;
use krxchart_types::{CompanyRecord, DateRange, PriceBar, Ticker};

use crate::{FetchError, KrxClient};

/// Provider of the listed-company roster.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Retrieves the full roster, in the provider's order.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be retrieved or parsed. An
    /// empty `Ok` means the provider published no rows.
    async fn fetch_listing(&self) -> Result<Vec<CompanyRecord>, FetchError>;
}

/// Provider of daily price series.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Retrieves the daily bars for `ticker` within `range` (inclusive),
    /// ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the series cannot be retrieved or parsed. An
    /// empty `Ok` means there were no trading days in range.
    async fn fetch_prices(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<PriceBar>, FetchError>;
}

#[async_trait]
impl ListingSource for KrxClient {
    async fn fetch_listing(&self) -> Result<Vec<CompanyRecord>, FetchError> {
        Self::fetch_listing(self).await
    }
}

#[async_trait]
impl PriceSource for KrxClient {
    async fn fetch_prices(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<PriceBar>, FetchError> {
        Self::fetch_prices(self, ticker, range).await
    }
}
