//! Priority-ranked wallet balance views.
//!
//! The core is [`pipeline::derive`]: balances on known blockchains with a
//! positive amount, ordered by blockchain priority and valued with a
//! [`market_data::PriceTable`]. The remaining modules load balances and
//! prices, render rows and expose the CLI commands.

pub mod app;
pub mod config;
pub mod format;
pub mod market_data;
pub mod models;
pub mod pipeline;
pub mod presentation;
pub mod priority;
pub mod storage;
pub mod swap;
