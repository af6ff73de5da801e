//! Display rows for derived balances.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::format::format_usd_value;
use crate::models::FormattedWalletBalance;

/// One rendered wallet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRow {
    /// Unique within one set of rows.
    pub key: String,
    pub currency: String,
    pub blockchain: String,
    pub amount: f64,
    pub formatted_amount: String,
    /// `None` when no price was available.
    pub usd_value: Option<f64>,
    pub usd_display: String,
}

/// Build one row per balance, in order.
///
/// Keys are `{blockchain}-{currency}`. The balance source does not guarantee
/// unique pairs, so a repeated key gets a `#2`, `#3`, ... suffix.
pub fn wallet_rows(balances: &[FormattedWalletBalance], display: &DisplayConfig) -> Vec<WalletRow> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    balances
        .iter()
        .map(|balance| {
            let base_key = format!("{}-{}", balance.blockchain(), balance.currency());
            let count = seen.entry(base_key.clone()).or_insert(0);
            *count += 1;
            let key = if *count == 1 {
                base_key
            } else {
                tracing::debug!(key = %base_key, occurrence = *count, "duplicate row key");
                format!("{base_key}#{count}")
            };

            WalletRow {
                key,
                currency: balance.currency().to_string(),
                blockchain: balance.blockchain().to_string(),
                amount: balance.amount(),
                formatted_amount: balance.formatted.clone(),
                usd_value: balance.is_priced().then_some(balance.usd_value),
                usd_display: format_usd_value(balance.usd_value, display),
            }
        })
        .collect()
}

/// Render rows as an aligned plain-text table.
pub fn render_table(rows: &[WalletRow]) -> String {
    let header = ["CURRENCY", "BLOCKCHAIN", "AMOUNT", "USD VALUE"];
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.currency.as_str(),
                row.blockchain.as_str(),
                row.formatted_amount.as_str(),
                row.usd_display.as_str(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(cells.iter()) {
        let line = format!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
