//! HTTP client for the roster and price endpoints.

use bytes::Bytes;
use krxchart_types::{CompanyRecord, DateRange, PriceBar, Ticker};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::listing::{ListingParseError, decode_listing, parse_listing};
use crate::prices::{PriceParseError, parse_prices};
use crate::url::{LISTING_URL, PRICE_URL, price_url};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Roster download URL.
    pub listing_url: String,
    /// Base URL of the daily chart endpoint.
    pub price_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            price_url: PRICE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("krxchart/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching roster or price data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The roster document could not be decoded or parsed.
    #[error(transparent)]
    Listing(#[from] ListingParseError),

    /// The price payload could not be parsed.
    #[error(transparent)]
    Prices(#[from] PriceParseError),
}

/// HTTP client for the KIND roster and the daily chart endpoint.
///
/// Each call performs exactly one GET. There is no retry and no caching.
#[derive(Debug, Clone)]
pub struct KrxClient {
    client: Client,
    config: ClientConfig,
}

impl KrxClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads and parses the full listed-company roster.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// document that is not a EUC-KR roster table.
    pub async fn fetch_listing(&self) -> Result<Vec<CompanyRecord>, FetchError> {
        let body = self.get(&self.config.listing_url).await?;
        let html = decode_listing(&body)?;
        let records = parse_listing(&html)?;
        tracing::info!(count = records.len(), "loaded company roster");
        Ok(records)
    }

    /// Downloads the daily bars for `ticker` within `range` (inclusive).
    ///
    /// Returns an empty vector when the range holds no trading days.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// malformed payload.
    pub async fn fetch_prices(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<PriceBar>, FetchError> {
        let url = price_url(&self.config.price_url, ticker, &range);
        let body = self.get(&url).await?;
        let mut bars = parse_prices(&String::from_utf8_lossy(&body))?;
        bars.retain(|bar| range.contains(bar.date));
        tracing::info!(%ticker, %range, count = bars.len(), "loaded price series");
        Ok(bars)
    }

    async fn get(&self, url: &str) -> Result<Bytes, FetchError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockito::Matcher;

    const ROSTER: &str = "<table><tr><th>회사명</th><th>종목코드</th></tr>\
        <tr><td>삼성전자</td><td>5930</td></tr>\
        <tr><td>NAVER</td><td>035420</td></tr></table>";

    fn config_for(server: &mockito::ServerGuard) -> ClientConfig {
        ClientConfig {
            listing_url: format!("{}/corpList.do", server.url()),
            price_url: format!("{}/siseJson.naver", server.url()),
            ..Default::default()
        }
    }

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.listing_url, LISTING_URL);
        assert_eq!(config.price_url, PRICE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("krxchart/"));
    }

    #[tokio::test]
    async fn test_fetch_listing_decodes_euc_kr() {
        let mut server = mockito::Server::new_async().await;
        let (body, _, _) = encoding_rs::EUC_KR.encode(ROSTER);
        let mock = server
            .mock("GET", "/corpList.do")
            .with_status(200)
            .with_header("content-type", "text/html; charset=EUC-KR")
            .with_body(body.into_owned())
            .create_async()
            .await;

        let client = KrxClient::new(config_for(&server)).unwrap();
        let records = client.fetch_listing().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "삼성전자");
        assert_eq!(records[0].code.as_str(), "005930");
        assert_eq!(records[1].code.as_str(), "035420");
    }

    #[tokio::test]
    async fn test_fetch_listing_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/corpList.do")
            .with_status(503)
            .create_async()
            .await;

        let client = KrxClient::new(config_for(&server)).unwrap();
        let err = client.fetch_listing().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_prices_sends_compact_dates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/siseJson.naver")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("symbol".into(), "005930".into()),
                Matcher::UrlEncoded("startTime".into(), "20240102".into()),
                Matcher::UrlEncoded("endTime".into(), "20240103".into()),
                Matcher::UrlEncoded("timeframe".into(), "day".into()),
            ]))
            .with_status(200)
            .with_body(
                "[['날짜', '시가', '고가', '저가', '종가', '거래량', '외국인소진율'],\n\
                 [\"20240102\", 78200, 79800, 78200, 79600, 17142847, 53.36],\n\
                 [\"20240103\", 78500, 78800, 77000, 77000, 21753644, 53.39]]",
            )
            .create_async()
            .await;

        let client = KrxClient::new(config_for(&server)).unwrap();
        let ticker = Ticker::parse("005930").unwrap();
        let bars = client
            .fetch_prices(&ticker, range((2024, 1, 2), (2024, 1, 3)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].volume, 21_753_644);
    }

    #[tokio::test]
    async fn test_fetch_prices_empty_range() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/siseJson.naver")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[['날짜', '시가', '고가', '저가', '종가', '거래량', '외국인소진율']]")
            .create_async()
            .await;

        let client = KrxClient::new(config_for(&server)).unwrap();
        let ticker = Ticker::parse("005930").unwrap();
        let bars = client
            .fetch_prices(&ticker, range((2024, 1, 6), (2024, 1, 7)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(bars.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_prices_drops_bars_outside_range() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/siseJson.naver")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[[\"20231229\", 1, 1, 1, 1, 1], [\"20240102\", 2, 2, 2, 2, 2]]")
            .create_async()
            .await;

        let client = KrxClient::new(config_for(&server)).unwrap();
        let ticker = Ticker::parse("000660").unwrap();
        let bars = client
            .fetch_prices(&ticker, range((2024, 1, 1), (2024, 1, 31)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
