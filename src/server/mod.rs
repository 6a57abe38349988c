//! Server lifecycle management
//!
//! Opens the venue store before binding, so a missing or unreadable database
//! stops the process instead of serving errors, then runs the HTTP listener
//! until Ctrl-C.

mod router;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub use router::build_router;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::StoreHandle;

/// Open the store, bind the listener and serve until shutdown.
pub async fn run(config: AppConfig) -> Result<()> {
    let state = AppState::new(StoreHandle::new(config.storage.candidate_paths()));

    let store = state.store().get().await.context("venue database unavailable; run build-db first")?;
    tracing::info!(path = %store.path().display(), records = store.record_count(), "venue store ready");

    let addr = config.network.bind_addr();
    let listener = TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    serve(listener, state, &config).await
}

/// Serve the API on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState, config: &AppConfig) -> Result<()> {
    let router = build_router(state, &config.network);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await.context("HTTP server failed")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
