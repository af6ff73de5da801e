//! In-memory balance source for testing and embedding.

use anyhow::Result;
use tokio::sync::Mutex;

use super::BalanceSource;
use crate::models::WalletBalance;

#[derive(Default)]
pub struct MemoryBalanceSource {
    balances: Mutex<Vec<WalletBalance>>,
}

impl MemoryBalanceSource {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self {
            balances: Mutex::new(balances),
        }
    }

    /// Replace the whole sequence, as a balance feed emitting a new snapshot.
    pub async fn set_balances(&self, balances: Vec<WalletBalance>) {
        *self.balances.lock().await = balances;
    }
}

#[async_trait::async_trait]
impl BalanceSource for MemoryBalanceSource {
    async fn load_balances(&self) -> Result<Vec<WalletBalance>> {
        Ok(self.balances.lock().await.clone())
    }
}
