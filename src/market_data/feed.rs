use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::PriceTable;
use crate::models::TokenPrice;

/// A source of price-list records.
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>>;

    fn name(&self) -> &str;
}

/// Fetch the feed's records and reduce them to a [`PriceTable`].
pub async fn fetch_price_table(feed: &dyn PriceFeed) -> Result<PriceTable> {
    let quotes = feed.fetch_prices().await?;
    let table = PriceTable::from_quotes(&quotes);
    tracing::debug!(
        feed = feed.name(),
        records = quotes.len(),
        currencies = table.len(),
        "loaded price table"
    );
    Ok(table)
}

/// Feed serving a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    quotes: Vec<TokenPrice>,
}

impl StaticPriceFeed {
    pub fn new(quotes: Vec<TokenPrice>) -> Self {
        Self { quotes }
    }
}

#[async_trait::async_trait]
impl PriceFeed for StaticPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>> {
        Ok(self.quotes.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Feed reading a JSON price list (same layout as the HTTP feed) from disk.
#[derive(Debug, Clone)]
pub struct JsonFilePriceFeed {
    path: PathBuf,
}

impl JsonFilePriceFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PriceFeed for JsonFilePriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<TokenPrice>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read price list: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse price list: {}", self.path.display()))
    }

    fn name(&self) -> &str {
        "file"
    }
}
