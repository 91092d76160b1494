//! Web form for the ciphers.
//!
//! A stateless axum app: every request builds its own ciphers, so there is
//! no shared application state to lock.

mod handlers;
mod page;
mod router;

use anyhow::Context;
use tracing::info;

pub use router::build_router;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("web server failed")?;

    info!("web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
