//! Shiprate CLI
//!
//! Thin bootstrap around the carrier layer: loads configuration, builds a
//! carrier, and fetches quotes for a JSON rate request supplied as a file
//! argument or on stdin.

use anyhow::{bail, Context};
use std::io::Read;
use std::sync::Arc;
use tracing::info;

use shiprate::carriers::{CarrierFactory, HttpTransport};
use shiprate::config::Settings;
use shiprate::domain::RateRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shiprate=info".parse().unwrap()),
        )
        .json()
        .init();

    // Load configuration; missing credentials are fatal here, not at request time
    let settings = Settings::load().context("Failed to load configuration")?;

    info!("Starting shiprate v{}", env!("CARGO_PKG_VERSION"));

    // Read the rate request from the file argument, or stdin
    let raw = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let request: RateRequest =
        serde_json::from_str(&raw).context("Rate request is not valid JSON")?;

    // Validate once at the boundary; carriers assume a checked request
    request.validate().context("Rate request failed validation")?;

    let transport = Arc::new(HttpTransport::new());
    let Some(carrier) = CarrierFactory::create("ups", &settings, transport) else {
        bail!("No carrier available");
    };

    let quotes = carrier.get_rates(&request).await?;
    info!(carrier = carrier.code(), quotes = quotes.len(), "Rates fetched");

    println!("{}", serde_json::to_string_pretty(&quotes)?);

    Ok(())
}
