//! Shutdown signal handling

use tracing::{info, warn};

/// Resolve once the user asks the process to stop (Ctrl-C, or SIGTERM on Unix).
///
/// If no handler can be installed this never resolves, so the caller's
/// task simply runs to completion.
#[cfg(unix)]
pub async fn shutdown_requested() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            warn!(error = %e, "could not install SIGTERM handler");
            return ctrl_c().await;
        }
    };

    tokio::select! {
        _ = ctrl_c() => {}
        _ = sigterm.recv() => info!("received SIGTERM"),
    }
}

/// Resolve once the user presses Ctrl-C.
#[cfg(not(unix))]
pub async fn shutdown_requested() {
    ctrl_c().await
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C"),
        Err(e) => {
            warn!(error = %e, "could not listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}
