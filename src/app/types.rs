use serde::Serialize;

use crate::presentation::WalletRow;

/// JSON output for the balances view
#[derive(Debug, Serialize)]
pub struct BalancesOutput {
    pub rows: Vec<WalletRow>,
    /// Sum of the priced rows.
    pub total_usd: f64,
    pub total_usd_display: String,
    /// Currencies shown without a USD value.
    pub unpriced: Vec<String>,
    /// Input balances hidden by the filter (unranked chain or non-positive amount).
    pub hidden: usize,
    pub price_source: String,
}

/// JSON output for the blockchain priority table
#[derive(Debug, Serialize)]
pub struct PriorityOutput {
    pub blockchain: String,
    pub priority: i32,
}
