use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use super::BalanceSource;
use crate::models::WalletBalance;

/// Balances read from a file.
///
/// Two layouts are accepted:
/// - a JSON array of balances (`[{"currency": ..}, ..]`), parsed strictly;
/// - JSON Lines, one balance per line. Blank lines are ignored and lines that
///   fail to parse are skipped with a warning.
pub struct JsonFileBalanceSource {
    path: PathBuf,
}

impl JsonFileBalanceSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_lines(&self, content: &str) -> Vec<WalletBalance> {
        let mut balances = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<WalletBalance>(line) {
                Ok(balance) => balances.push(balance),
                Err(e) => tracing::warn!(
                    path = %self.path.display(),
                    line = idx + 1,
                    error = %e,
                    "skipping invalid balance entry"
                ),
            }
        }
        balances
    }
}

#[async_trait::async_trait]
impl BalanceSource for JsonFileBalanceSource {
    async fn load_balances(&self) -> Result<Vec<WalletBalance>> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read balances file: {}", self.path.display()))?;

        if content.trim_start().starts_with('[') {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse balances file: {}", self.path.display()))
        } else {
            Ok(self.parse_lines(&content))
        }
    }
}
