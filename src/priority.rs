//! Blockchain priority classification.
//!
//! Every blockchain identifier maps to an integer priority. Higher priorities
//! sort first. Identifiers outside the known set get [`DEFAULT_PRIORITY`],
//! which is strictly lower than every known priority and doubles as the
//! filter threshold for balances.

use std::fmt;

use serde::Serialize;

/// Priority assigned to any blockchain not in the known set.
pub const DEFAULT_PRIORITY: i32 = -99;

/// Blockchains with a configured priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
}

impl Blockchain {
    /// All known blockchains, highest priority first.
    pub const ALL: [Blockchain; 5] = [
        Blockchain::Osmosis,
        Blockchain::Ethereum,
        Blockchain::Arbitrum,
        Blockchain::Zilliqa,
        Blockchain::Neo,
    ];

    pub fn priority(self) -> i32 {
        match self {
            Blockchain::Osmosis => 100,
            Blockchain::Ethereum => 50,
            Blockchain::Arbitrum => 30,
            Blockchain::Zilliqa => 20,
            Blockchain::Neo => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Blockchain::Osmosis => "osmosis",
            Blockchain::Ethereum => "ethereum",
            Blockchain::Arbitrum => "arbitrum",
            Blockchain::Zilliqa => "zilliqa",
            Blockchain::Neo => "neo",
        }
    }

    /// Resolve an identifier, ignoring ASCII case.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a blockchain identifier. Total: unknown identifiers are not an
/// error, they resolve to [`DEFAULT_PRIORITY`].
pub fn priority_of(blockchain: &str) -> i32 {
    Blockchain::parse(blockchain)
        .map(Blockchain::priority)
        .unwrap_or(DEFAULT_PRIORITY)
}

/// Whether balances on this blockchain are eligible for display.
pub fn is_ranked(blockchain: &str) -> bool {
    priority_of(blockchain) > DEFAULT_PRIORITY
}
