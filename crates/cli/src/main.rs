//! RocketShoes terminal front end.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog with cart quantities
//! rocketshoes products
//!
//! # Add one unit of product 3 to the cart
//! rocketshoes add 3
//!
//! # Show the cart
//! rocketshoes cart
//!
//! # Change quantities / remove
//! rocketshoes increment 3
//! rocketshoes decrement 3
//! rocketshoes update 3 --amount 2
//! rocketshoes remove 3
//! ```
//!
//! Configuration comes from `ROCKETSHOES_*` variables (a `.env` file is read
//! first); `--api-url` and `--storage` override them. Logs go to stderr and
//! follow `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rocketshoes_cart::config::CartConfig;
use rocketshoes_cart::models::product::ProductId;
use rocketshoes_cart::CartStore;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod render;

use error::CliError;

#[derive(Parser)]
#[command(name = "rocketshoes")]
#[command(author, version, about = "RocketShoes catalog and cart")]
struct Cli {
    /// Base URL of the catalog/stock API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// JSON file holding the persisted cart
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    Products,
    /// Show the cart
    Cart,
    /// Add one unit of a product to the cart
    Add { product_id: ProductId },
    /// Raise a cart item's quantity by one
    Increment { product_id: ProductId },
    /// Lower a cart item's quantity by one
    Decrement { product_id: ProductId },
    /// Raise a cart item's quantity by a given amount
    Update {
        product_id: ProductId,

        #[arg(short, long, allow_hyphen_values = true)]
        amount: i64,
    },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rocketshoes=info,rocketshoes_cart=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match &e {
            CliError::Action { source, .. } => tracing::error!(error = %source, "cart action failed"),
            other => tracing::error!("Command failed: {other}"),
        }
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<CartConfig, CliError> {
    let mut config = CartConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url.clone())?;
    }
    if let Some(path) = &cli.storage {
        config.storage_path = path.clone();
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    tracing::debug!(api = %config.api_base_url, storage = %config.storage_path.display(), "configuration loaded");
    let mut store = CartStore::from_config(&config)?;

    match cli.command {
        Commands::Products => commands::catalog::list(&store).await?,
        Commands::Cart => commands::cart::show(&store),
        Commands::Add { product_id } => commands::catalog::add(&mut store, product_id).await?,
        Commands::Increment { product_id } => {
            commands::cart::increment(&mut store, product_id).await?;
        }
        Commands::Decrement { product_id } => {
            commands::cart::decrement(&mut store, product_id).await?;
        }
        Commands::Update { product_id, amount } => {
            commands::cart::update(&mut store, product_id, amount).await?;
        }
        Commands::Remove { product_id } => commands::cart::remove(&mut store, product_id).await?,
    }
    Ok(())
}
