mod json_file;
mod memory;

pub use json_file::JsonFileBalanceSource;
pub use memory::MemoryBalanceSource;

use anyhow::Result;

use crate::models::WalletBalance;

/// Source of wallet balances.
///
/// Each call returns the source's current sequence; callers re-derive their
/// view whenever it changes.
#[async_trait::async_trait]
pub trait BalanceSource: Send + Sync {
    async fn load_balances(&self) -> Result<Vec<WalletBalance>>;
}
