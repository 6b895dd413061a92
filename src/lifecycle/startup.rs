//! Startup orchestration.
//!
//! Builds the service chain in its reference order:
//! `BasicStringService` → `LoggingMiddleware` → `InstrumentingMiddleware`,
//! so endpoints enter through instrumentation and logging sees the raw call.

use std::sync::Arc;

use metrics::Recorder;
use tracing::Dispatch;

use crate::config::MetricsConfig;
use crate::endpoint::Endpoints;
use crate::observability::metrics::MetricNames;
use crate::service::{
    BasicStringService, InstrumentingMiddleware, LoggingMiddleware, StringService,
};

/// Compose the decorated service.
pub fn build_service(
    dispatch: Dispatch,
    recorder: Arc<dyn Recorder + Send + Sync>,
    metrics: &MetricsConfig,
) -> Arc<dyn StringService> {
    let svc = BasicStringService;
    let svc = LoggingMiddleware::new(dispatch, svc);
    let svc = InstrumentingMiddleware::new(recorder, MetricNames::from_config(metrics), svc);
    Arc::new(svc)
}

/// Compose the decorated service and wrap it in endpoints.
pub fn assemble(
    dispatch: Dispatch,
    recorder: Arc<dyn Recorder + Send + Sync>,
    metrics: &MetricsConfig,
) -> Endpoints {
    Endpoints::new(build_service(dispatch, recorder, metrics))
}
