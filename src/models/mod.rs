mod token;
mod wallet_balance;

pub use token::{Token, TokenPrice};
pub use wallet_balance::{FormattedWalletBalance, WalletBalance};
