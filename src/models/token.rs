use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of the price list: the USD price of a currency at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub currency: String,
    pub date: DateTime<Utc>,
    pub price: f64,
}

impl TokenPrice {
    pub fn new(currency: impl Into<String>, date: DateTime<Utc>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            date,
            price,
        }
    }
}

/// A token that can be selected for a swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub icon: String,
}
