// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! USD spot prices for native currencies.
//!
//! Single GET against a cryptocompare-compatible feed:
//! `GET <base>/data/price?fsym=<SYMBOL>&tsyms=USD` -> `{"USD": <number>}`.
//! A failed lookup is fatal for the requesting (wallet, chain) unit only;
//! the aggregator drops that unit and leaves its siblings alone.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::{env_or_default, PRICE_FEED_URL_ENV};

const DEFAULT_PRICE_FEED_URL: &str = "https://min-api.cryptocompare.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("Price feed request failed: {0}")]
    Request(String),

    #[error("Price feed returned status {0}")]
    BadStatus(u16),

    #[error("Price feed response was invalid: {0}")]
    InvalidResponse(String),
}

/// Source of USD spot prices, keyed by currency symbol.
pub trait PriceSource: Send + Sync + 'static {
    fn usd_price(&self, symbol: &str) -> impl Future<Output = Result<f64, PriceError>> + Send;
}

#[derive(Debug, Deserialize)]
struct PriceQuote {
    #[serde(rename = "USD")]
    usd: f64,
}

/// HTTP price feed client.
#[derive(Debug, Clone)]
pub struct PriceOracle {
    http: Client,
    base_url: String,
}

impl PriceOracle {
    /// Build a client against `PRICE_FEED_URL` (or the public default).
    pub fn from_env() -> Result<Self, PriceError> {
        let base_url = env_or_default(PRICE_FEED_URL_ENV, DEFAULT_PRICE_FEED_URL);
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, PriceError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PriceError::Request(format!("failed to build HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }
}

impl PriceSource for PriceOracle {
    async fn usd_price(&self, symbol: &str) -> Result<f64, PriceError> {
        let url = format!("{}/data/price?fsym={symbol}&tsyms=USD", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PriceError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PriceError::BadStatus(response.status().as_u16()));
        }

        let quote: PriceQuote = response
            .json()
            .await
            .map_err(|e| PriceError::InvalidResponse(e.to_string()))?;

        Ok(quote.usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_deserializes_from_feed_shape() {
        let quote: PriceQuote = serde_json::from_str(r#"{"USD": 1834.52}"#).unwrap();
        assert_eq!(quote.usd, 1834.52);
    }

    #[test]
    fn quote_rejects_missing_usd_key() {
        assert!(serde_json::from_str::<PriceQuote>(r#"{"EUR": 1.0}"#).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let oracle = PriceOracle::new("https://feed.example.com/").unwrap();
        assert_eq!(oracle.base_url, "https://feed.example.com");
    }
}
