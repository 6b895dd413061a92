//! Logging decorator.
//!
//! Emits one structured event per call after the wrapped service returns,
//! whether it succeeded or not.

use std::time::Instant;

use tracing::Dispatch;

use super::{count_value, ServiceError, StringService};

/// Wraps a `StringService` and logs every call through the injected dispatcher.
pub struct LoggingMiddleware<S> {
    dispatch: Dispatch,
    next: S,
}

impl<S: StringService> LoggingMiddleware<S> {
    pub fn new(dispatch: Dispatch, next: S) -> Self {
        Self { dispatch, next }
    }
}

impl<S: StringService> StringService for LoggingMiddleware<S> {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        let begin = Instant::now();
        let result = self.next.uppercase(s);
        let took = begin.elapsed();

        let output = result.as_deref().unwrap_or_default();
        let err = result.as_ref().err().map(ToString::to_string);
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!(
                method = "uppercase",
                input = s,
                output = output,
                err = err.as_deref(),
                took = ?took,
            );
        });

        result
    }

    fn count(&self, s: &str) -> Result<usize, ServiceError> {
        let begin = Instant::now();
        let result = self.next.count(s);
        let took = begin.elapsed();

        let n = count_value(&result);
        let err = result.as_ref().err().map(ToString::to_string);
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!(
                method = "count",
                input = s,
                n = n,
                err = err.as_deref(),
                took = ?took,
            );
        });

        result
    }
}
