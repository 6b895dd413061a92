//! Configuration validation.
//!
//! Serde handles syntax; this checks values. All errors are collected rather
//! than stopping at the first one.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("metrics.{field} {value:?} is not a valid metric name component")]
    MetricName { field: &'static str, value: String },

    #[error("metrics.path {0:?} must start with '/'")]
    MetricsPath(String),

    #[error("metrics.path {0:?} is already served by the service")]
    MetricsPathReserved(String),
}

/// Paths the router registers before the metrics endpoint.
pub const RESERVED_PATHS: [&str; 3] = ["/uppercase", "/count", "/health"];

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let metrics = &config.metrics;
    for (field, value) in [("namespace", &metrics.namespace), ("subsystem", &metrics.subsystem)] {
        if !is_metric_component(value) {
            errors.push(ValidationError::MetricName {
                field,
                value: value.clone(),
            });
        }
    }
    if !metrics.path.starts_with('/') {
        errors.push(ValidationError::MetricsPath(metrics.path.clone()));
    } else if RESERVED_PATHS.contains(&metrics.path.as_str()) {
        errors.push(ValidationError::MetricsPathReserved(metrics.path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// [a-zA-Z_][a-zA-Z0-9_]*
fn is_metric_component(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
