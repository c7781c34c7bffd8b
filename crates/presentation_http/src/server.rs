//! Artifact server lifecycle

use std::{future::Future, io, path::PathBuf};

use axum::Router;
use infrastructure::ServerConfig;
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{routes::create_router, state::AppState};

/// Server failures
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Server loop failed
    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

/// Router with the request trace layer applied
pub fn app(artifact_path: impl Into<PathBuf>) -> Router {
    create_router(AppState::new(artifact_path)).layer(TraceLayer::new_for_http())
}

/// Serve the artifact until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(
    config: &ServerConfig,
    artifact_path: impl Into<PathBuf>,
) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve_on(listener, app(artifact_path), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    info!("Route map available at http://{local}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
