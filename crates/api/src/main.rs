//! CityNext - appointment booking service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use citynext_api::utils::logging;
use citynext_api::{create_router, AppContext};
use citynext_infra::config;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env before reading configuration
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    logging::init(config.log_level);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        db_path = %config.database.path,
        log_level = %config.log_level,
        nager_api_url = %config.holidays.base_url,
        "starting CityNext appointment API"
    );

    let bind_address = config.server.bind_address();
    let ctx = Arc::new(AppContext::with_config(config).context("failed to initialise services")?);
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
