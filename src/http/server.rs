//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the service routes
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Expose Prometheus metrics and a health probe
//! - Serve until the shutdown signal fires

use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::endpoint::Endpoints;
use crate::http::transport;

/// HTTP server for the string service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server. Metrics are served only when a handle is given.
    pub fn new(config: ServiceConfig, endpoints: Endpoints, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            router: Self::build_router(&config, endpoints, metrics),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(
        config: &ServiceConfig,
        endpoints: Endpoints,
        metrics: Option<PrometheusHandle>,
    ) -> Router {
        let mut router = Router::new()
            .route("/uppercase", post(transport::uppercase_handler))
            .route("/count", post(transport::count_handler))
            .route("/health", get(health))
            .with_state(endpoints);

        if let Some(handle) = metrics {
            router = router.route(
                &config.metrics.path,
                get(move || {
                    let handle = handle.clone();
                    async move { handle.render() }
                }),
            );
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{BasicStringService, ServiceError, StringService};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[derive(Default)]
    struct CallCounter {
        calls: AtomicUsize,
    }

    impl StringService for CallCounter {
        fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BasicStringService.uppercase(s)
        }

        fn count(&self, s: &str) -> Result<usize, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BasicStringService.count(s)
        }
    }

    fn router_for(svc: Arc<dyn StringService>, metrics: Option<PrometheusHandle>) -> Router {
        HttpServer::new(ServiceConfig::default(), Endpoints::new(svc), metrics).into_router()
    }

    async fn post_json(router: Router, path: &str, body: &'static str) -> (StatusCode, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_uppercase_route() {
        let router = router_for(Arc::new(BasicStringService), None);
        let (status, body) = post_json(router, "/uppercase", r#"{"s":"hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"v":"HELLO"}"#);
    }

    #[tokio::test]
    async fn test_count_route() {
        let router = router_for(Arc::new(BasicStringService), None);
        let (status, body) = post_json(router, "/count", r#"{"s":"hello"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"v":5}"#);
    }

    #[tokio::test]
    async fn test_empty_input_is_in_band() {
        let router = router_for(Arc::new(BasicStringService), None);
        let (status, body) = post_json(router.clone(), "/uppercase", r#"{"s":""}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"v":"","err":"Empty string"}"#);

        let (status, body) = post_json(router, "/count", r#"{"s":""}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"v":-1,"err":"Empty string"}"#);
    }

    #[tokio::test]
    async fn test_malformed_body_skips_service() {
        let svc = Arc::new(CallCounter::default());
        let router = router_for(svc.clone(), None);
        let (status, body) = post_json(router, "/count", r#"{"s":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("malformed request body"));
        assert_eq!(svc.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_request_id_propagated() {
        let router = router_for(Arc::new(BasicStringService), None);
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_metrics_route_only_when_enabled() {
        let router = router_for(Arc::new(BasicStringService), None);
        let response = router
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let (_, handle) = crate::observability::metrics::build_recorder();
        let router = router_for(Arc::new(BasicStringService), Some(handle));
        let response = router
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_bytes = 8;
        let router = HttpServer::new(config, Endpoints::new(Arc::new(BasicStringService)), None)
            .into_router();
        let (status, _) = post_json(router, "/uppercase", r#"{"s":"far too long for the limit"}"#).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
