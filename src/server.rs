//! HTTP server initialization and runtime setup.
//!
//! Opens the document store, wires the services, and runs the Axum server
//! until Ctrl-C.

use crate::config::Config;
use crate::domain::repositories::DocumentStore;
use crate::infrastructure::persistence::MemoryDocumentStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Document store (file-backed when `STORE_PATH` is set, in-memory otherwise)
/// - Application services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store file exists but cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;

    let state = AppState::new(store, config.report_settings());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the document store described by the configuration.
///
/// # Errors
///
/// Returns an error if the store file cannot be loaded.
pub async fn open_store(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match &config.store_path {
        Some(path) => Arc::new(
            MemoryDocumentStore::open(path)
                .await
                .with_context(|| format!("Failed to open store file {}", path.display()))?,
        ),
        None => {
            tracing::warn!("STORE_PATH not set; data will be lost on shutdown");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    store.ping().await.context("Document store is not reachable")?;
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
