//! Launchboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from `launchboard.toml` (or the platform config dir), with
//! environment variable overrides:
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_CSV_PATH`: Launch records CSV (default: data/spacex_launch_dash.csv)
//! - `LAUNCHBOARD_LOG_LEVEL` / `LAUNCHBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Fine-grained log filter (overrides the config level)

use anyhow::Context;
use launchboard::api::{serve, AppState, ServerConfig};
use launchboard::config::Config;
use launchboard::dataset::load_csv;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so logging can follow it
    let config = Config::load_default();
    init_tracing(&config);

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset resource: {:?}", config.data.csv_path);

    // Load the dataset in full; any failure here is fatal and the
    // server never binds
    let dataset = Arc::new(
        load_csv(&config.data.csv_path)
            .with_context(|| format!("Cannot load dataset {:?}", config.data.csv_path))?,
    );

    let (min_payload, max_payload) = dataset.payload_extent();
    tracing::info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        min_payload_kg = min_payload,
        max_payload_kg = max_payload,
        "Dataset ready"
    );

    let server_config = ServerConfig::new(config.server.host.clone(), config.server.port);
    let state = AppState::new(dataset, server_config.clone());

    serve(state, &server_config)
        .await
        .context("Server error")?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config, honoring RUST_LOG
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "launchboard={},tower_http=info",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
