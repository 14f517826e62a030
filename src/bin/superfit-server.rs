// ABOUTME: SuperFit server binary
// ABOUTME: Loads configuration, migrates storage, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SuperFit

//! # SuperFit Server Binary
//!
//! Starts the SuperFit health backend: biomarker storage plus the Apple
//! Health import API.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use superfit_server::{
    config::ServerConfig,
    database::{BiomarkerStore, SqliteBiomarkerStore},
    logging,
    resources::ServerResources,
    routes,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "superfit-server")]
#[command(about = "SuperFit health backend - biomarker store and Apple Health import API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting SuperFit server");
    info!("{}", config.summary());

    let store = SqliteBiomarkerStore::new(&config.database_url).await?;
    store.migrate().await?;
    info!("Biomarker store ready: {}", config.database_url);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let resources = Arc::new(ServerResources::new(Arc::new(store), config));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {e}");
    }
}
