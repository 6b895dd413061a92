//! Metrics collection and exposition.
//!
//! # Metrics
//! - `<ns>_<sub>_request_count` (counter): calls by method, error
//! - `<ns>_<sub>_request_latency_seconds` (histogram): latency by method, error
//! - `<ns>_<sub>_count_result` (histogram): value returned by count
//!
//! # Design Decisions
//! - The Prometheus recorder is built, never installed globally; callers
//!   receive it and inject it where metrics are recorded
//! - Histograms render as summaries (exporter default)

use std::sync::Arc;

use metrics::{describe_counter, describe_histogram, Recorder, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;

/// Fully qualified metric names for one service instance.
#[derive(Debug, Clone)]
pub struct MetricNames {
    pub request_count: String,
    pub request_latency: String,
    pub count_result: String,
}

impl MetricNames {
    pub fn from_config(config: &MetricsConfig) -> Self {
        let prefix = format!("{}_{}", config.namespace, config.subsystem);
        Self {
            request_count: format!("{prefix}_request_count"),
            request_latency: format!("{prefix}_request_latency_seconds"),
            count_result: format!("{prefix}_count_result"),
        }
    }
}

/// Build a Prometheus recorder and the handle used to render it.
pub fn build_recorder() -> (Arc<dyn Recorder + Send + Sync>, PrometheusHandle) {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    tracing::info!("Prometheus metrics recorder initialized");
    (Arc::new(recorder), handle)
}

/// Register help text for the service metrics.
pub fn describe(recorder: &(dyn Recorder + Send + Sync), names: &MetricNames) {
    metrics::with_local_recorder(recorder, || {
        describe_counter!(names.request_count.clone(), "Number of requests received.");
        describe_histogram!(
            names.request_latency.clone(),
            Unit::Seconds,
            "Total duration of requests in seconds."
        );
        describe_histogram!(names.count_result.clone(), "The result of each count method.");
    });
}
