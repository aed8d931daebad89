//! MEXC Futures CLI — Entry Point
//!
//! Thin command-line front-end over `MexcClient`. Prints the exchange's
//! JSON response to stdout; logs go to stderr.
//!
//! Wiring sequence:
//! 1. Load `.env`, parse arguments
//! 2. Load config (optional `--config path`, defaults otherwise)
//! 3. Init tracing (pretty or JSON, `RUST_LOG` override)
//! 4. Read the web key from the configured environment variable
//! 5. Build the browser-profile transport + client, run one command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mexc_futures_client::adapters::api::{DEFAULT_EDIT_ORDER_TYPE, MexcClient, MexcClientConfig};
use mexc_futures_client::adapters::http::BrowserTransport;
use mexc_futures_client::config::{self, AppConfig, ClientConfig, LogFormat};
use mexc_futures_client::domain::ContractSizeLookup;

/// MEXC futures private API client
#[derive(Parser)]
#[command(name = "mexc-futures")]
#[command(about = "Signed requests against the MEXC futures web API")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Place an order from a JSON object, e.g.
    /// '{"symbol":"BTC_USDT","side":1,"openType":1,"type":1,"leverage":10,"vol":10,"price":2.5}'
    Place {
        /// Order body as JSON (key order is preserved)
        order: String,
    },
    /// Cancel orders by ID
    Cancel {
        /// Order IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Cancel all open orders
    CancelAll,
    /// Close all open positions at market
    CloseAll,
    /// Change an existing order
    Edit {
        /// Updated order body as JSON
        order: String,
        /// Order-type selector interpolated into the endpoint path
        #[arg(long, default_value = DEFAULT_EDIT_ORDER_TYPE)]
        order_type: String,
    },
    /// Look up a symbol's contract size
    ContractSize {
        /// Contract symbol, e.g. BTC_USDT
        symbol: String,
    },
    /// Show account assets
    Balance {
        /// Only print the available balance of this currency
        #[arg(long)]
        currency: Option<String>,
    },
    /// Convert a notional amount to contracts
    Contracts {
        /// Contract symbol
        symbol: String,
        /// Notional volume in quote currency
        notional: f64,
        /// Fair price used for the conversion
        price: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // ── Load configuration ──────────────────────────────────
    let app_config = match &cli.config {
        Some(path) => config::loader::load_config(path).context("Failed to load configuration")?,
        None => AppConfig::default(),
    };

    init_tracing(&app_config.client)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %app_config.api.base_url,
        "Starting MEXC futures client"
    );

    let key = app_config
        .api
        .load_key()
        .context("Failed to load web API key")?;

    let transport = Arc::new(
        BrowserTransport::new(&app_config.api.transport()).context("Failed to create transport")?,
    );
    let client = MexcClient::new(
        transport,
        MexcClientConfig {
            base_url: app_config.api.base_url.clone(),
        },
    );

    let output = run(&client, &key, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Execute one command and return what should be printed.
async fn run(client: &MexcClient, key: &str, command: Commands) -> Result<Value> {
    match command {
        Commands::Place { order } => {
            let order = parse_body(&order)?;
            client.place_order(key, &order).await
        }
        Commands::Cancel { ids } => client.cancel_order(key, ids.as_slice()).await,
        Commands::CancelAll => client.cancel_all(key).await,
        Commands::CloseAll => client.close_all_positions(key).await,
        Commands::Edit { order, order_type } => {
            let order = parse_body(&order)?;
            client.edit_order(key, &order, &order_type).await
        }
        Commands::ContractSize { symbol } => {
            let lookup = client.get_contract_size(key, &symbol).await?;
            Ok(match lookup {
                ContractSizeLookup::Found(size) => json!({ "symbol": symbol, "contractSize": size }),
                other => json!({ "symbol": symbol, "contractSize": null, "status": other.to_string() }),
            })
        }
        Commands::Balance { currency: None } => client.get_balance(key).await,
        Commands::Balance {
            currency: Some(currency),
        } => {
            let available = client.available_balance(key, &currency).await?;
            Ok(json!({ "currency": currency, "availableBalance": available }))
        }
        Commands::Contracts {
            symbol,
            notional,
            price,
        } => {
            let contracts = client
                .contracts_for_notional(key, &symbol, notional, price)
                .await?;
            Ok(json!({ "symbol": symbol, "contracts": contracts }))
        }
    }
}

/// Parse a JSON body given on the command line.
fn parse_body(raw: &str) -> Result<Value> {
    let body: Value = serde_json::from_str(raw).context("Order body is not valid JSON")?;
    anyhow::ensure!(body.is_object(), "Order body must be a JSON object");
    Ok(body)
}

/// Initialize tracing to stderr so stdout stays pure JSON.
fn init_tracing(config: &ClientConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}
