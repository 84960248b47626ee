// ABOUTME: Lifsy HTTP server binary
// ABOUTME: Loads config and state, then serves the dashboard API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lifsy

//! # Lifsy Server Binary
//!
//! Starts the Lifsy HTTP API: habit tracking, the deposit challenge, and
//! lifestyle predictions, with all dashboard state persisted as a single
//! JSON blob.

use anyhow::Result;
use clap::Parser;
use lifsy_intelligence::WeightSet;
use lifsy_server::{config::ServerConfig, logging, routes, state::ServerResources, storage::StateStore};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "lifsy-server")]
#[command(about = "Lifsy - habit tracking and lifestyle prediction API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the dashboard state file location
    #[arg(long)]
    state_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging before anything that might want to log
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(state_file) = args.state_file {
        config.state_file = state_file;
    }

    info!("Starting Lifsy server");
    info!("{}", config.summary());

    let store = StateStore::new(config.state_file.clone());
    let dashboard = store.load_or_seed();

    let weight_override = match &config.weights_file {
        Some(path) => {
            let document = std::fs::read_to_string(path)?;
            let weights = WeightSet::parse_document(&document)?;
            info!("weight override loaded from {}", path.display());
            Some(weights)
        }
        None => None,
    };

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config, store, dashboard, weight_override));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("listening on {bind_address}");

    axum::serve(listener, routes::router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
