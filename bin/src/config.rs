//! Environment-driven settings, read once at startup.

use anyhow::{Context, Result};
use krxchart_lib::ClientConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application settings.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) listing_url: String,
    pub(crate) price_url: String,
    pub(crate) output_dir: PathBuf,
    pub(crate) timeout: Duration,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the `KRXCHART_*` variables.
    pub(crate) fn load() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the settings from a variable lookup, using defaults for
    /// missing values.
    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ClientConfig::default();

        let timeout_secs = match var("KRXCHART_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("KRXCHART_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?,
            None => defaults.timeout.as_secs(),
        };

        Ok(Self {
            listing_url: var("KRXCHART_LISTING_URL").unwrap_or(defaults.listing_url),
            price_url: var("KRXCHART_PRICE_URL").unwrap_or(defaults.price_url),
            output_dir: var("KRXCHART_OUTPUT_DIR")
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// HTTP client settings.
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            listing_url: self.listing_url.clone(),
            price_url: self.price_url.clone(),
            timeout: self.timeout,
            ..ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        let defaults = ClientConfig::default();

        assert_eq!(config.listing_url, defaults.listing_url);
        assert_eq!(config.price_url, defaults.price_url);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("KRXCHART_LISTING_URL", "http://127.0.0.1:9000/list"),
            ("KRXCHART_PRICE_URL", "http://127.0.0.1:9000/prices"),
            ("KRXCHART_OUTPUT_DIR", "/tmp/charts"),
            ("KRXCHART_TIMEOUT_SECS", "5"),
        ]);

        assert_eq!(config.output_dir, PathBuf::from("/tmp/charts"));
        let client = config.client_config();
        assert_eq!(client.listing_url, "http://127.0.0.1:9000/list");
        assert_eq!(client.price_url, "http://127.0.0.1:9000/prices");
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert!(client.user_agent.starts_with("krxchart/"));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let err = AppConfig::from_vars(|key| {
            (key == "KRXCHART_TIMEOUT_SECS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("KRXCHART_TIMEOUT_SECS"));
    }
}
