mod balances;
mod config;
mod prices;
mod types;

pub use balances::{priority_table, wallet_balances};
pub use config::config_output;
pub use prices::{build_price_feed, list_tokens, load_prices_best_effort, swap_quote, PriceMode};
pub use types::{BalancesOutput, PriorityOutput};
