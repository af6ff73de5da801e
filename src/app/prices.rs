use std::path::Path;

use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::market_data::{fetch_price_table, JsonFilePriceFeed, PriceFeed, PriceTable};
use crate::models::Token;
use crate::swap::{self, Quote};

/// Where prices come from for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceMode {
    /// Use the configured feed (local file if set, otherwise HTTP).
    #[default]
    Feed,
    /// Do not load prices; every USD value is unavailable.
    Offline,
}

/// Resolve the price feed: an explicit file wins over the configured file,
/// which wins over the HTTP feed.
pub fn build_price_feed(
    config: &ResolvedConfig,
    prices_file: Option<&Path>,
) -> Result<Box<dyn PriceFeed>> {
    if let Some(path) = prices_file.or(config.prices.file.as_deref()) {
        return Ok(Box::new(JsonFilePriceFeed::new(path)));
    }
    http_feed(config)
}

#[cfg(feature = "market_data")]
fn http_feed(config: &ResolvedConfig) -> Result<Box<dyn PriceFeed>> {
    let feed = crate::market_data::providers::SwitcheoPriceFeed::from_config(&config.prices)?;
    Ok(Box::new(feed))
}

#[cfg(not(feature = "market_data"))]
fn http_feed(_config: &ResolvedConfig) -> Result<Box<dyn PriceFeed>> {
    anyhow::bail!("HTTP price feed requires the `market_data` feature; configure `prices.file` instead")
}

/// Load prices, falling back to an empty table when the feed fails.
pub async fn load_prices_best_effort(feed: &dyn PriceFeed) -> PriceTable {
    match fetch_price_table(feed).await {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(feed = feed.name(), error = %e, "Failed to load prices; continuing without USD values");
            PriceTable::new()
        }
    }
}

pub async fn list_tokens(feed: &dyn PriceFeed, config: &ResolvedConfig) -> Result<Vec<Token>> {
    let prices = fetch_price_table(feed).await?;
    Ok(swap::tradable_tokens(&prices, &config.prices.icon_base_url))
}

pub async fn swap_quote(feed: &dyn PriceFeed, from: &str, to: &str, amount: f64) -> Result<Quote> {
    let prices = fetch_price_table(feed).await?;
    Ok(swap::quote(&prices, from, to, amount)?)
}
