//! Unit conversion HTTP server binary.
//!
//! Loads the configuration, builds the catalog and engine (including any
//! custom units), sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin unitconv-server
//!
//! # With custom units
//! UNITCONV_CONFIG=unitconv.toml PORT=8080 cargo run --bin unitconv-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `UNITCONV_CONFIG`: Path to a TOML config file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use unitconv::config::ServerConfig;
use unitconv::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting unit conversion server");

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    info!(
        custom_units = config.custom_units.len(),
        "Unit catalog and engine initialized"
    );

    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
