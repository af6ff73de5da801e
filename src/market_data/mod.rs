mod feed;
mod price_table;
#[cfg(feature = "market_data")]
pub mod providers;

pub use feed::{fetch_price_table, JsonFilePriceFeed, PriceFeed, StaticPriceFeed};
pub use price_table::PriceTable;
