use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use walletview::app::{self, PriceMode};
use walletview::config::{default_config_path, ResolvedConfig};
use walletview::presentation::render_table;
use walletview::storage::JsonFileBalanceSource;

#[derive(Parser)]
#[command(name = "walletview")]
#[command(about = "Priority-ranked wallet balances with live token prices")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
enum Command {
    /// Show ranked balances with USD values
    Balances {
        /// Balances file (JSON array or JSON Lines)
        file: PathBuf,

        /// Read prices from this file instead of the configured feed
        #[arg(long)]
        prices_file: Option<PathBuf>,

        /// Skip loading prices
        #[arg(long)]
        offline: bool,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// List tradable tokens from the price feed
    Prices {
        /// Read prices from this file instead of the configured feed
        #[arg(long)]
        prices_file: Option<PathBuf>,
    },
    /// Quote a swap at current prices
    Quote {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: f64,

        /// Read prices from this file instead of the configured feed
        #[arg(long)]
        prices_file: Option<PathBuf>,
    },
    /// Show the blockchain priority table
    Priorities,
    /// Show current configuration
    Config,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = ResolvedConfig::load_or_default(&config_path)?;

    match cli.command {
        Command::Balances {
            file,
            prices_file,
            offline,
            format,
        } => {
            let source = JsonFileBalanceSource::new(&file);
            let feed = app::build_price_feed(&config, prices_file.as_deref())?;
            let mode = if offline {
                PriceMode::Offline
            } else {
                PriceMode::Feed
            };
            let output = app::wallet_balances(&source, feed.as_ref(), mode, &config).await?;
            match format {
                OutputFormat::Json => print_json(&output)?,
                OutputFormat::Table => {
                    print!("{}", render_table(&output.rows));
                    println!("\nTotal: {}", output.total_usd_display);
                    if !output.unpriced.is_empty() {
                        println!("No price for: {}", output.unpriced.join(", "));
                    }
                }
            }
        }
        Command::Prices { prices_file } => {
            let feed = app::build_price_feed(&config, prices_file.as_deref())?;
            let tokens = app::list_tokens(feed.as_ref(), &config).await?;
            print_json(&tokens)?;
        }
        Command::Quote {
            from,
            to,
            amount,
            prices_file,
        } => {
            let feed = app::build_price_feed(&config, prices_file.as_deref())?;
            let quote = app::swap_quote(feed.as_ref(), &from, &to, amount).await?;
            print_json(&quote)?;
        }
        Command::Priorities => {
            print_json(&app::priority_table())?;
        }
        Command::Config => {
            print_json(&app::config_output(&config_path, &config))?;
        }
    }

    Ok(())
}
