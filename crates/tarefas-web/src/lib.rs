//! tarefas-web - Web frontend for Tarefas+ using Leptos SSR + Axum

#![recursion_limit = "1024"]

pub mod assets;
pub mod auth;
pub mod components;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod sse;

pub use router::create_router;

use anyhow::{Context, Result};
use std::sync::Arc;
use tarefas_core::DataStore;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server until Ctrl+C
pub async fn run(store: Arc<DataStore>, addr: &str) -> Result<()> {
    let router = create_router(store);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local_addr = listener.local_addr()?;

    info!("Web server listening on http://{}", local_addr);
    println!("Web server listening on http://{}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
