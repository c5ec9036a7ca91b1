//! Exchange ticker codes.

use serde::{Deserialize, Serialize};

use crate::TickerError;

/// A KRX ticker code: exactly six ASCII digits, zero-padded on the left.
///
/// ```
/// use krxchart_types::Ticker;
///
/// let ticker: Ticker = "005930".parse().unwrap();
/// assert_eq!(ticker.as_str(), "005930");
/// assert_eq!(Ticker::normalize("5930").unwrap(), ticker);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Number of characters in every ticker code.
    pub const LEN: usize = 6;

    /// Returns true if `s` is already a well-formed ticker code.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Parses a ticker, requiring exactly six ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a six-digit string.
    pub fn parse(s: &str) -> Result<Self, TickerError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TickerError::Invalid(s.to_string()))
        }
    }

    /// Normalizes a code as it appears in listing tables.
    ///
    /// Accepts surrounding whitespace and fewer than six digits (the
    /// leading zeros are often stripped by spreadsheet exports).
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is not all digits or has
    /// more than six of them.
    pub fn normalize(raw: &str) -> Result<Self, TickerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.len() > Self::LEN
            || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(TickerError::Invalid(raw.to_string()));
        }
        Ok(Self(format!("{trimmed:0>6}")))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(TickerError::Invalid(value))
        }
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let ticker = Ticker::parse("005930").unwrap();
        assert_eq!(ticker.as_str(), "005930");
        assert_eq!(ticker.to_string(), "005930");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Ticker::parse("5930").is_err());
        assert!(Ticker::parse("0059300").is_err());
        assert!(Ticker::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(Ticker::parse("00593A").is_err());
        assert!(Ticker::parse(" 05930").is_err());
        // Full-width digits are not ASCII.
        assert!(Ticker::parse("００５９３０").is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Ticker::normalize(" 660 ").unwrap().as_str(), "000660");
        assert_eq!(Ticker::normalize("035720").unwrap().as_str(), "035720");
        assert!(Ticker::normalize("0001A0").is_err());
        assert!(Ticker::normalize("1234567").is_err());
        assert!(Ticker::normalize("  ").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let ticker = Ticker::parse("000660").unwrap();
        let json = serde_json::to_string(&ticker).unwrap();
        assert_eq!(json, "\"000660\"");
        let back: Ticker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ticker);
        assert!(serde_json::from_str::<Ticker>("\"660\"").is_err());
    }
}
