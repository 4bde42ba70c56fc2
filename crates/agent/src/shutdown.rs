//! Process signal handling.

use tokio_util::sync::CancellationToken;

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// Panics if a handler cannot be installed; an agent that cannot be
/// stopped by a signal should not keep running.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), stopping monitor");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, stopping monitor");
        }
    }
}

/// Spawn a task that cancels `cancel` when a shutdown signal arrives.
pub fn cancel_on_signal(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        shutdown_signal().await;
        cancel.cancel();
    })
}
