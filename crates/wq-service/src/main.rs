//! Water Quality Service — versioned HTTP API server.
//!
//! Serves the `/api/v1/water` route group on the port named by `PORT`
//! (default 8081).

use tracing_subscriber::EnvFilter;

use wq_service::config::ApiConfig;
use wq_service::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "water-quality-service starting"
    );

    let config = ApiConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    tracing::info!(host = %config.host, port = config.port, "config loaded");

    server::run(&config)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "could not start server"))?;

    Ok(())
}
