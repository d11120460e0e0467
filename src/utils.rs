//! Small helpers shared by the binary and the tests.

use tracing::info;

/// Completes when the process receives an interrupt (Ctrl+C / SIGINT).
///
/// Only the interrupt is handled; SIGTERM and SIGKILL are not intercepted
/// and will hard-kill the process.
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("interrupt received, starting graceful shutdown");
}

/// Resolve the host name once at process start.
///
/// Falls back to `"unknown"` when the OS does not report a usable name, so
/// the `hostname` response field is never empty.
pub fn resolve_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
