//! Listener bootstrap: bind, serve, shut down.

use std::future::Future;
use std::io;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ApiConfig;
use crate::routes;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read bound address: {0}")]
    LocalAddr(#[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Bind the listener described by `config`.
pub async fn bind(config: &ApiConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// Every connection is driven on its own task, so requests never wait on
/// one another.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind and serve the water API until `shutdown` resolves.
pub async fn run_until<F>(config: &ApiConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(config).await?;
    let local = listener.local_addr().map_err(ServerError::LocalAddr)?;
    tracing::info!(addr = %local, "listening");

    serve(listener, routes::build_router(), shutdown).await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Bind and serve until SIGINT or SIGTERM.
pub async fn run(config: &ApiConfig) -> Result<(), ServerError> {
    run_until(config, shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
