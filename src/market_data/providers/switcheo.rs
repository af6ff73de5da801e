//! HTTP price list provider.
//!
//! The endpoint returns a flat JSON array of `{currency, date, price}` records
//! with USD prices. A currency can appear several times with different dates.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::{PricesConfig, DEFAULT_PRICES_URL};
use crate::market_data::PriceFeed;
use crate::models::TokenPrice;

#[derive(Debug, Clone)]
pub struct SwitcheoPriceFeed {
    client: Client,
    url: String,
}

impl SwitcheoPriceFeed {
    /// Creates a feed for the default endpoint with a default HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            url: DEFAULT_PRICES_URL.to_string(),
        }
    }

    /// Creates a feed with a custom HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            url: DEFAULT_PRICES_URL.to_string(),
        }
    }

    /// Builds a feed from the `[prices]` config section.
    pub fn from_config(config: &PricesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client).with_url(config.url.clone()))
    }

    /// Overrides the price list URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SwitcheoPriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PriceFeed for SwitcheoPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>> {
        tracing::debug!(url = %self.url, "fetching price list");
        let prices = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch price list from {}", self.url))?
            .error_for_status()?
            .json::<Vec<TokenPrice>>()
            .await
            .context("Failed to parse price list response")?;
        Ok(prices)
    }

    fn name(&self) -> &str {
        "switcheo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"[
        {"currency": "BLUR", "date": "2023-08-29T07:10:24.000Z", "price": 0.20811525423728813},
        {"currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679},
        {"currency": "USD", "date": "2023-08-29T07:10:30.000Z", "price": 1}
    ]"#;

    #[test]
    fn test_parse_price_list() {
        let prices: Vec<TokenPrice> = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices[1].currency, "bNEO");
        assert_eq!(prices[2].price, 1.0);
    }

    #[test]
    fn test_from_config_uses_configured_url() {
        let config = PricesConfig {
            url: "http://localhost:9/prices.json".to_string(),
            ..PricesConfig::default()
        };
        let feed = SwitcheoPriceFeed::from_config(&config).unwrap();
        assert_eq!(feed.url(), "http://localhost:9/prices.json");
        assert_eq!(feed.name(), "switcheo");
    }
}
