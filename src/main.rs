//! String service (v1)
//!
//! A JSON-over-HTTP microservice built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────────────┐
//!                  │                      STRING SERVICE                      │
//!                  │                                                          │
//!   POST /uppercase│  ┌───────────┐   ┌──────────┐   ┌──────────────────────┐ │
//!   POST /count    │  │   http    │──▶│ endpoint │──▶│ instrumenting        │ │
//!   ───────────────┼─▶│ transport │   │ adapters │   │   → logging          │ │
//!                  │  │ decode    │   │          │   │     → service        │ │
//!   JSON response  │  │ encode    │◀──│ err→body │◀──│                      │ │
//!   ◀──────────────┼──└───────────┘   └──────────┘   └──────────┬───────────┘ │
//!                  │                                            │             │
//!                  │                         ┌──────────────────┴──────────┐  │
//!   GET /metrics ◀─┼─────────────────────────│ Prometheus recorder, tracing│  │
//!                  │                         └─────────────────────────────┘  │
//!                  └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::util::SubscriberInitExt;

use stringsvc::config::{load_config, validate_config, ConfigError, ServiceConfig};
use stringsvc::http::HttpServer;
use stringsvc::lifecycle::{signals, startup, Shutdown};
use stringsvc::observability;

#[derive(Parser)]
#[command(name = "stringsvc")]
#[command(about = "Uppercase and count strings over HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address.clone_from(bind);
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let dispatch = observability::logging::build_dispatch(&config.logging);
    dispatch.clone().try_init()?;

    tracing::info!("stringsvc v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.metrics.enabled,
        "Configuration loaded"
    );

    let (recorder, handle) = observability::metrics::build_recorder();
    let endpoints = startup::assemble(dispatch, recorder, &config.metrics);
    let metrics = config.metrics.enabled.then_some(handle);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, endpoints, metrics);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
