//! # City Info Service
//!
//! Entry point: parses [`Config`], sets up tracing, starts the
//! [`CatalogSystem`] over the seeded catalog and serves the HTTP API until
//! Ctrl-C.

use anyhow::Context;
use city_info::catalog::Catalog;
use city_info::config::Config;
use city_info::http;
use city_info::lifecycle::{setup_tracing, CatalogSystem};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing(config.log_format);

    info!(bind = %config.bind, mailbox = config.mailbox_capacity, "Starting city info service");

    let system = CatalogSystem::start(Catalog::seeded(), config.mailbox_capacity);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, http::router(system.client.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("catalog actor failed")?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
    }
    info!("Shutdown signal received");
}
