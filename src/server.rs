//! Listener lifecycle: bind, serve, drain, stop.
//!
//! The lifecycle runs `Starting -> Serving -> Draining -> Stopped`. Binding
//! is split from serving so a bind failure surfaces before any background
//! task exists and so tests can bind port 0 and read the chosen address.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;

/// Bound HTTP listener plus the drain budget applied at shutdown.
pub struct Server {
    listener: TcpListener,
    graceful_timeout: Duration,
}

impl Server {
    /// Bind the listener on all interfaces at the configured port.
    ///
    /// A bind failure is returned to the caller and ends the process with a
    /// non-zero exit; there is no point serving nothing.
    pub async fn bind(config: &Config) -> Result<Self> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            graceful_timeout: config.graceful_timeout,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve `router` until `shutdown` completes, then drain and stop.
    ///
    /// Connections are accepted on a background task and each one runs on
    /// its own task. When `shutdown` resolves the listener stops accepting
    /// and in-flight connections get up to the graceful timeout to finish;
    /// past the deadline the serve task is aborted and whatever is still
    /// open dies with the process. Serve and drain errors are logged, never
    /// returned, so the shutdown path always reports a clean stop.
    pub async fn run_until<F>(self, router: Router, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let Server {
            listener,
            graceful_timeout,
        } = self;

        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let mut serve_task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = drain_rx.await;
                })
                .await
        });

        tokio::pin!(shutdown);

        tokio::select! {
            () = &mut shutdown => {
                let _ = drain_tx.send(());

                match tokio::time::timeout(graceful_timeout, &mut serve_task).await {
                    Ok(result) => log_serve_result(result),
                    Err(_) => {
                        warn!(
                            "graceful timeout of {:?} elapsed, dropping remaining connections",
                            graceful_timeout
                        );
                        serve_task.abort();
                    }
                }
            }
            result = &mut serve_task => {
                // The listener died on its own. Log it and hold the process
                // until the interrupt arrives, as if it were still serving.
                log_serve_result(result);
                shutdown.await;
            }
        }

        info!("shutting down");
    }
}

fn log_serve_result(result: std::result::Result<std::io::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("server error: {e}"),
        Err(e) => error!("server task failed: {e}"),
    }
}
