//! Instrumenting decorator.
//!
//! Records, per call:
//! - `request_count` (counter) by `method` and `error`
//! - `request_latency_seconds` (histogram) by `method` and `error`
//! - `count_result` (histogram, count only), the sentinel on failure

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, histogram, Recorder};

use super::{count_value, ServiceError, StringService};
use crate::observability::metrics::MetricNames;

/// Wraps a `StringService` and records metrics into the injected recorder.
pub struct InstrumentingMiddleware<S> {
    recorder: Arc<dyn Recorder + Send + Sync>,
    names: MetricNames,
    next: S,
}

impl<S: StringService> InstrumentingMiddleware<S> {
    pub fn new(recorder: Arc<dyn Recorder + Send + Sync>, names: MetricNames, next: S) -> Self {
        crate::observability::metrics::describe(recorder.as_ref(), &names);
        Self {
            recorder,
            names,
            next,
        }
    }

    fn record_request(&self, method: &'static str, failed: bool, took: Duration) {
        let error = if failed { "true" } else { "false" };
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            counter!(self.names.request_count.clone(), "method" => method, "error" => error)
                .increment(1);
            histogram!(self.names.request_latency.clone(), "method" => method, "error" => error)
                .record(took.as_secs_f64());
        });
    }
}

impl<S: StringService> StringService for InstrumentingMiddleware<S> {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        let begin = Instant::now();
        let result = self.next.uppercase(s);
        self.record_request("uppercase", result.is_err(), begin.elapsed());
        result
    }

    fn count(&self, s: &str) -> Result<usize, ServiceError> {
        let begin = Instant::now();
        let result = self.next.count(s);
        self.record_request("count", result.is_err(), begin.elapsed());

        let n = count_value(&result) as f64;
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            histogram!(self.names.count_result.clone()).record(n);
        });

        result
    }
}
