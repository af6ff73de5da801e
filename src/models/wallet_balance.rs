use serde::{Deserialize, Serialize};

/// A holding of one currency on one blockchain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    /// Not validated: zero or negative amounts are accepted and filtered later.
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

/// A balance enriched with its display string and USD value.
///
/// `usd_value` is `NaN` when no price was known for the currency. It is
/// serialized as `usdValue`; serde_json writes `NaN` as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedWalletBalance {
    #[serde(flatten)]
    pub balance: WalletBalance,
    pub formatted: String,
    #[serde(rename = "usdValue")]
    pub usd_value: f64,
}

impl FormattedWalletBalance {
    pub fn currency(&self) -> &str {
        &self.balance.currency
    }

    pub fn amount(&self) -> f64 {
        self.balance.amount
    }

    pub fn blockchain(&self) -> &str {
        &self.balance.blockchain
    }

    /// Whether a price was available when the USD value was computed.
    pub fn is_priced(&self) -> bool {
        !self.usd_value.is_nan()
    }
}

// NaN never equals itself, so a missing price would make otherwise identical
// outputs compare unequal. Two NaN USD values are treated as equal here.
impl PartialEq for FormattedWalletBalance {
    fn eq(&self, other: &Self) -> bool {
        let usd_equal = (self.usd_value.is_nan() && other.usd_value.is_nan())
            || self.usd_value == other.usd_value;
        self.balance == other.balance && self.formatted == other.formatted && usd_equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_balance_deserialization() {
        let json = r#"{"currency":"ETH","amount":2.5,"blockchain":"ethereum"}"#;
        let balance: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance, WalletBalance::new("ETH", 2.5, "ethereum"));
    }

    #[test]
    fn test_formatted_balance_serialization_flattens_fields() {
        let formatted = FormattedWalletBalance {
            balance: WalletBalance::new("OSMO", 5.0, "osmosis"),
            formatted: "5".to_string(),
            usd_value: 50.0,
        };
        let value = serde_json::to_value(&formatted).unwrap();
        assert_eq!(value["currency"], "OSMO");
        assert_eq!(value["blockchain"], "osmosis");
        assert_eq!(value["formatted"], "5");
        assert_eq!(value["usdValue"], 50.0);
    }

    #[test]
    fn test_missing_price_serializes_as_null() {
        let formatted = FormattedWalletBalance {
            balance: WalletBalance::new("XYZ", 1.0, "neo"),
            formatted: "1".to_string(),
            usd_value: f64::NAN,
        };
        let value = serde_json::to_value(&formatted).unwrap();
        assert!(value["usdValue"].is_null());
        assert!(!formatted.is_priced());
    }

    #[test]
    fn test_nan_usd_values_compare_equal() {
        let a = FormattedWalletBalance {
            balance: WalletBalance::new("XYZ", 1.0, "neo"),
            formatted: "1".to_string(),
            usd_value: f64::NAN,
        };
        assert_eq!(a, a.clone());
    }
}
