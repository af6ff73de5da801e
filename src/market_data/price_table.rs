use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::TokenPrice;

/// USD unit prices keyed by currency symbol.
///
/// Lookups are exact: `"eth"` and `"ETH"` are different currencies. A missing
/// currency is not an error; [`PriceTable::usd_value`] returns `NaN` for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from price-list records.
    ///
    /// The feed can list a currency more than once; the record with the most
    /// recent `date` wins, and on equal dates the later record wins.
    pub fn from_quotes(quotes: &[TokenPrice]) -> Self {
        let mut latest: HashMap<String, (DateTime<Utc>, f64)> = HashMap::new();
        for quote in quotes {
            match latest.entry(quote.currency.clone()) {
                Entry::Occupied(mut entry) => {
                    if quote.date >= entry.get().0 {
                        entry.insert((quote.date, quote.price));
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert((quote.date, quote.price));
                }
            }
        }

        Self {
            prices: latest
                .into_iter()
                .map(|(currency, (_, price))| (currency, price))
                .collect(),
        }
    }

    pub fn with_price(mut self, currency: impl Into<String>, price: f64) -> Self {
        self.insert(currency, price);
        self
    }

    pub fn insert(&mut self, currency: impl Into<String>, price: f64) -> Option<f64> {
        self.prices.insert(currency.into(), price)
    }

    pub fn get(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    /// `price * amount`, or `NaN` when the currency has no price.
    pub fn usd_value(&self, currency: &str, amount: f64) -> f64 {
        self.get(currency).unwrap_or(f64::NAN) * amount
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 8, 29, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_from_quotes_keeps_most_recent() {
        let quotes = vec![
            TokenPrice::new("ETH", at(7), 1645.0),
            TokenPrice::new("ETH", at(9), 1700.0),
            TokenPrice::new("ETH", at(8), 1650.0),
            TokenPrice::new("ATOM", at(7), 7.2),
        ];
        let table = PriceTable::from_quotes(&quotes);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ETH"), Some(1700.0));
        assert_eq!(table.get("ATOM"), Some(7.2));
    }

    #[test]
    fn test_from_quotes_equal_dates_later_record_wins() {
        let quotes = vec![
            TokenPrice::new("USDC", at(7), 0.99),
            TokenPrice::new("USDC", at(7), 1.0),
        ];
        assert_eq!(PriceTable::from_quotes(&quotes).get("USDC"), Some(1.0));
    }

    #[test]
    fn test_usd_value_missing_price_is_nan() {
        let table = PriceTable::new().with_price("ETH", 1000.0);
        assert_eq!(table.usd_value("ETH", 2.0), 2000.0);
        assert!(table.usd_value("OSMO", 2.0).is_nan());
        assert!(table.usd_value("eth", 2.0).is_nan());
    }

    #[test]
    fn test_collect_from_pairs() {
        let table: PriceTable = [("ETH", 1000.0), ("OSMO", 10.0)].into_iter().collect();
        assert_eq!(table.get("OSMO"), Some(10.0));
        assert!(!table.is_empty());
    }
}
