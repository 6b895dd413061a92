//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusHandle;
use stringsvc::config::ServiceConfig;
use stringsvc::http::HttpServer;
use stringsvc::lifecycle::{startup, Shutdown};
use stringsvc::observability::metrics::build_recorder;
use tokio::net::TcpListener;

/// A running service bound to an ephemeral local port.
pub struct TestService {
    pub addr: SocketAddr,
    pub metrics: PrometheusHandle,
    pub shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the fully decorated service with metrics enabled.
pub async fn start_service() -> TestService {
    let config = ServiceConfig::default();
    let (recorder, handle) = build_recorder();
    let endpoints = startup::assemble(tracing::Dispatch::none(), recorder, &config.metrics);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, endpoints, Some(handle.clone()));
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        metrics: handle,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
