//! Portfolio Contact Relay - Main entry point
//!
//! Loads configuration, wires the mail client into the relay state, and
//! serves the HTTP endpoint until the process exits.

use anyhow::Result;
use portfolio_relay::{relay, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact relay for {} via {}",
        config.contact_to, config.mail_api_url
    );

    // Run the server (this will block until the server exits)
    relay::serve(&config).await?;

    info!("Contact relay shutdown complete");
    Ok(())
}
