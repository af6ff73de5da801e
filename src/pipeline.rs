//! Balance derivation: filter, rank and format wallet balances.
//!
//! [`derive`] is pure and total. Balances on unranked blockchains and
//! balances with a non-positive amount are dropped, the rest are ordered by
//! descending blockchain priority (ties keep their input order) and enriched
//! with a display string and a USD value. A missing price yields a `NaN` USD
//! value instead of an error.

use crate::format::format_amount;
use crate::market_data::PriceTable;
use crate::models::{FormattedWalletBalance, WalletBalance};
use crate::priority::{priority_of, DEFAULT_PRIORITY};

/// Whether a balance survives the filter step.
pub fn is_displayable(balance: &WalletBalance) -> bool {
    priority_of(&balance.blockchain) > DEFAULT_PRIORITY && balance.amount > 0.0
}

pub fn format_balance(balance: &WalletBalance, prices: &PriceTable) -> FormattedWalletBalance {
    FormattedWalletBalance {
        balance: balance.clone(),
        formatted: format_amount(balance.amount),
        usd_value: prices.usd_value(&balance.currency, balance.amount),
    }
}

pub fn derive(balances: &[WalletBalance], prices: &PriceTable) -> Vec<FormattedWalletBalance> {
    let mut ranked: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .filter(|balance| is_displayable(balance))
        .map(|balance| (priority_of(&balance.blockchain), balance))
        .collect();

    // sort_by is stable, equal priorities keep input order
    ranked.sort_by(|(lhs, _), (rhs, _)| rhs.cmp(lhs));

    ranked
        .into_iter()
        .map(|(_, balance)| format_balance(balance, prices))
        .collect()
}

/// Memoized [`derive`].
///
/// Keeps the last inputs and their output and only recomputes when either
/// input differs. The output is always equal to `derive(balances, prices)`.
#[derive(Debug, Default)]
pub struct BalanceView {
    cached: Option<CachedView>,
    recomputations: usize,
}

#[derive(Debug)]
struct CachedView {
    balances: Vec<WalletBalance>,
    prices: PriceTable,
    output: Vec<FormattedWalletBalance>,
}

impl BalanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        balances: &[WalletBalance],
        prices: &PriceTable,
    ) -> &[FormattedWalletBalance] {
        let stale = match &self.cached {
            Some(cached) => cached.balances != balances || cached.prices != *prices,
            None => true,
        };

        if stale {
            let output = derive(balances, prices);
            tracing::debug!(
                inputs = balances.len(),
                outputs = output.len(),
                "recomputed balance view"
            );
            self.recomputations += 1;
            self.cached = Some(CachedView {
                balances: balances.to_vec(),
                prices: prices.clone(),
                output,
            });
        }

        match &self.cached {
            Some(cached) => &cached.output,
            None => &[],
        }
    }

    /// Number of times the view has been recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
