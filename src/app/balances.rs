use anyhow::Result;

use super::prices::{load_prices_best_effort, PriceMode};
use super::types::{BalancesOutput, PriorityOutput};
use crate::config::ResolvedConfig;
use crate::format::format_usd_value;
use crate::market_data::{PriceFeed, PriceTable};
use crate::pipeline::derive;
use crate::presentation::wallet_rows;
use crate::priority::Blockchain;
use crate::storage::BalanceSource;

/// Load balances and prices, derive the ranked view and build display rows.
pub async fn wallet_balances(
    source: &dyn BalanceSource,
    feed: &dyn PriceFeed,
    mode: PriceMode,
    config: &ResolvedConfig,
) -> Result<BalancesOutput> {
    let balances = source.load_balances().await?;

    let (prices, price_source) = match mode {
        PriceMode::Feed => (load_prices_best_effort(feed).await, feed.name().to_string()),
        PriceMode::Offline => (PriceTable::new(), "offline".to_string()),
    };

    let derived = derive(&balances, &prices);
    let hidden = balances.len() - derived.len();
    if hidden > 0 {
        tracing::debug!(hidden, "balances hidden by filter");
    }

    let rows = wallet_rows(&derived, &config.display);
    let total_usd: f64 = rows.iter().filter_map(|row| row.usd_value).sum();
    let mut unpriced: Vec<String> = rows
        .iter()
        .filter(|row| row.usd_value.is_none())
        .map(|row| row.currency.clone())
        .collect();
    unpriced.sort();
    unpriced.dedup();

    Ok(BalancesOutput {
        total_usd_display: format_usd_value(total_usd, &config.display),
        total_usd,
        rows,
        unpriced,
        hidden,
        price_source,
    })
}

pub fn priority_table() -> Vec<PriorityOutput> {
    Blockchain::ALL
        .iter()
        .map(|chain| PriorityOutput {
            blockchain: chain.to_string(),
            priority: chain.priority(),
        })
        .collect()
}
