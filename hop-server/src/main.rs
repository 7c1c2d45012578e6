//! hop-server - Hybrid Objective Planner service
//!
//! Serves precomputed objective-interference scores and physiological
//! radar profiles over HTTP, backed by static JSON/JSONL data files.
//! The datasets load once at startup and never change during a run;
//! restart to pick up regenerated files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hop_common::config::{resolve_data_folder, TomlConfig};
use hop_server::{build_router, AppState};

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "hop-server", version)]
struct Args {
    /// Folder holding objectives.json and the result datasets
    #[arg(long)]
    data_folder: Option<PathBuf>,

    /// HTTP port (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Bootstrap config file (default: ./hop.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = TomlConfig::load(args.config.as_deref())?;

    // Initialize tracing subscriber; RUST_LOG overrides the config level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Hybrid Objective Planner (hop-server) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let data_folder = resolve_data_folder(args.data_folder.as_deref(), &config);
    let port = args.port.unwrap_or(config.port);
    info!("Data folder: {}", data_folder.display());

    // All three inputs load eagerly; a bad dataset refuses to serve
    let state = AppState::load(&data_folder)
        .with_context(|| format!("failed to load data from {}", data_folder.display()))?;
    info!(
        "✓ Loaded {} objectives, {} interference records, {} physiology records",
        state.catalog.len(),
        state.interference.len(),
        state.physiology.len()
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, port))?;
    info!("hop-server listening on http://{}:{}", config.host, port);
    info!("Health check: http://{}:{}/health", config.host, port);

    axum::serve(listener, app).await?;

    Ok(())
}
