//! Harborwatch - container fleet tracking service
//!
//! Serves ETA intelligence and tolerant shipment lookup over a static fleet
//! snapshot.
//!
//! # Usage
//!
//! ```bash
//! # Run with the bundled demo snapshot
//! cargo run --release
//!
//! # Point at another snapshot directory and port
//! cargo run --release -- --data-dir /srv/fleet --bind 0.0.0.0:9000
//! ```
//!
//! # Environment Variables
//!
//! - `HARBORWATCH_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use harborwatch::api::{self, ApiState};
use harborwatch::config::AppConfig;
use harborwatch::snapshot::FleetSnapshot;
use harborwatch::weather::WeatherClient;

#[derive(Debug, Parser)]
#[command(name = "harborwatch", about = "Container fleet tracking service")]
struct Cli {
    /// Path to a TOML config file (overrides the search order)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Bind address override, e.g. 127.0.0.1:8080
    #[arg(long)]
    bind: Option<String>,

    /// Snapshot data directory override
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    let snapshot = FleetSnapshot::load(&config.data.dir)
        .with_context(|| format!("failed to load fleet snapshot from {}", config.data.dir.display()))?;

    let weather = WeatherClient::new(&config.weather).context("failed to build weather client")?;

    let state = ApiState {
        snapshot: Arc::new(snapshot),
        weather,
    };

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "harborwatch listening");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received shutdown signal");
            signal_token.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
        })
        .await
        .context("server error")?;

    info!("graceful shutdown complete");
    Ok(())
}
