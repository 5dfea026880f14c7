//! naver-compare - Naver Shopping price comparison CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use naver_compare::commands::{session, SearchCommand};
use naver_compare::config::{Config, OutputFormat};
use naver_compare::naver::Sort;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "naver-compare",
    version,
    about = "Naver Shopping price comparison CLI",
    long_about = "Searches the Naver Shopping open API, filters by price and brand, and compares hand-picked products."
)]
struct Cli {
    /// API client id
    #[arg(long, global = true, env = "NAVER_CLIENT_ID")]
    client_id: Option<String>,

    /// API client secret
    #[arg(long, global = true, env = "NAVER_CLIENT_SECRET")]
    client_secret: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Number of results to fetch (10-100)
        #[arg(short, long, default_value = "50")]
        display: u32,

        /// Sort order: sim, asc, dsc
        #[arg(long, default_value = "sim")]
        sort: Sort,

        /// Minimum price in won
        #[arg(long)]
        min_price: Option<u64>,

        /// Maximum price in won (0 = no limit)
        #[arg(long)]
        max_price: Option<u64>,

        /// Brand allow-list matched against titles (comma-separated)
        #[arg(long, value_delimiter = ',')]
        brands: Option<Vec<String>>,
    },

    /// Start an interactive comparison session
    #[command(alias = "i")]
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    if let Some(id) = cli.client_id {
        config.client_id = id;
    }
    if let Some(secret) = cli.client_secret {
        config.client_secret = secret;
    }

    match cli.command {
        Commands::Search { query, display, sort, min_price, max_price, brands } => {
            config.display = display;
            config.sort = sort;

            if let Some(min) = min_price {
                config.min_price = min;
            }
            if let Some(max) = max_price {
                config.max_price = max;
            }
            if let Some(brands) = brands {
                config.brands = brands;
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query).await?;
            println!("{}", output);
        }

        Commands::Session => {
            session::run(config).await?;
        }
    }

    Ok(())
}
