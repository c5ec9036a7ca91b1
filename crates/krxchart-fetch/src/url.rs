//! Endpoint URL construction.

use krxchart_types::{DateRange, Ticker};

/// KIND download endpoint for the full listed-company roster (EUC-KR HTML).
pub const LISTING_URL: &str =
    "http://kind.krx.co.kr/corpgeneral/corpList.do?method=download&searchType=13";

/// Naver Finance daily chart endpoint.
pub const PRICE_URL: &str = "https://api.finance.naver.com/siseJson.naver";

/// Builds the URL for a ticker's daily bars over an inclusive date range.
///
/// # Example
///
/// ```
/// use krxchart_fetch::url::{PRICE_URL, price_url};
/// use krxchart_types::{DateRange, Ticker};
/// use chrono::NaiveDate;
///
/// let ticker = Ticker::parse("005930").unwrap();
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(
///     price_url(PRICE_URL, &ticker, &range),
///     "https://api.finance.naver.com/siseJson.naver?symbol=005930&requestType=1&startTime=20240101&endTime=20240630&timeframe=day"
/// );
/// ```
#[must_use]
pub fn price_url(base: &str, ticker: &Ticker, range: &DateRange) -> String {
    format!(
        "{}?symbol={}&requestType=1&startTime={}&endTime={}&timeframe=day",
        base,
        ticker,
        range.start_compact(),
        range.end_compact()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_price_url_custom_base() {
        let ticker = Ticker::parse("000660").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let url = price_url("http://127.0.0.1:1234/prices", &ticker, &DateRange::single_day(day));
        assert_eq!(
            url,
            "http://127.0.0.1:1234/prices?symbol=000660&requestType=1&startTime=20241231&endTime=20241231&timeframe=day"
        );
    }
}
