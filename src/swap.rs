//! Token list and swap quotes derived from the price table.
//!
//! Quotes are indicative only: nothing here submits or simulates a trade.

use serde::Serialize;

use crate::market_data::PriceTable;
use crate::models::Token;

/// Decimal places shown for a quoted output amount.
pub const QUOTE_DISPLAY_DECIMALS: usize = 6;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuoteError {
    #[error("Unknown or unpriced token: {0}")]
    UnknownToken(String),
    #[error("Invalid amount {0}: must be a finite, non-negative number")]
    InvalidAmount(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub from: String,
    pub to: String,
    pub from_amount: f64,
    pub to_amount: f64,
    /// Units of `to` received per unit of `from`.
    pub rate: f64,
    pub to_amount_display: String,
}

/// Tokens that can be swapped: every priced currency with a positive price,
/// sorted by symbol.
pub fn tradable_tokens(prices: &PriceTable, icon_base_url: &str) -> Vec<Token> {
    let base = icon_base_url.trim_end_matches('/');
    let mut tokens: Vec<Token> = prices
        .iter()
        .filter(|(_, price)| *price > 0.0)
        .map(|(symbol, price)| Token {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            icon: format!("{base}/{symbol}.svg"),
        })
        .collect();
    tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    tokens
}

fn tradable_price(prices: &PriceTable, symbol: &str) -> Result<f64, QuoteError> {
    prices
        .get(symbol)
        .filter(|price| *price > 0.0)
        .ok_or_else(|| QuoteError::UnknownToken(symbol.to_string()))
}

/// Quote how much of `to` an `amount` of `from` is worth at current prices.
pub fn quote(prices: &PriceTable, from: &str, to: &str, amount: f64) -> Result<Quote, QuoteError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(QuoteError::InvalidAmount(amount));
    }
    let from_price = tradable_price(prices, from)?;
    let to_price = tradable_price(prices, to)?;

    let rate = from_price / to_price;
    let to_amount = amount * rate;

    Ok(Quote {
        from: from.to_string(),
        to: to.to_string(),
        from_amount: amount,
        to_amount,
        rate,
        to_amount_display: format!("{to_amount:.prec$}", prec = QUOTE_DISPLAY_DECIMALS),
    })
}
