//! Termination signals for graceful shutdown.

use anyhow::Result;
use tokio::signal;

/// Resolves on Ctrl+C or SIGTERM. If no handler can be installed the server
/// keeps running and must be stopped externally.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_shutdown().await {
        tracing::error!(error = %e, "failed to install shutdown signal handlers");
        std::future::pending::<()>().await;
    }
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("received Ctrl+C, shutting down");
        }
        result = wait_sigterm() => {
            result?;
            tracing::info!("received SIGTERM, shutting down");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<()> {
    std::future::pending::<Result<()>>().await
}
