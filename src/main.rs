//! Fixed-response HTTP service entry point.

use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use http_service::api::{create_router, AppState};
use http_service::config::Config;
use http_service::metrics;
use http_service::server::Server;
use http_service::utils::{resolve_hostname, shutdown_signal};

/// Fixed-response JSON HTTP service with graceful shutdown.
#[derive(Parser, Debug)]
#[command(name = "http-service")]
#[command(about = "Fixed-response JSON HTTP service with signal-driven graceful shutdown")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// The duration for which the server gracefully waits for existing
    /// connections to finish - e.g. 15s or 1m.
    #[arg(long, default_value = "15s", value_parser = humantime::parse_duration)]
    graceful_timeout: Duration,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("http_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Resolve configuration: environment first, then the CLI flag.
    let mut config = Config::load()?;
    config.graceful_timeout = args.graceful_timeout;
    config.validate()?;

    let hostname = resolve_hostname();

    info!("service name: {}", config.service_name);
    info!("hostname: {}", hostname);
    info!("graceful timeout: {:?}", config.graceful_timeout);

    let state = AppState::new(&config.service_name, &hostname);
    let router = create_router(state);

    // A failed bind ends the process here with a non-zero exit.
    let server = Server::bind(&config).await?;

    // Serves until interrupted, then drains. Drain errors are logged inside,
    // so the signal-driven path always exits 0.
    server.run_until(router, shutdown_signal()).await;

    Ok(())
}
