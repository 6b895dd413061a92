//! Structured logging.
//!
//! # Responsibilities
//! - Build the process dispatcher from `LoggingConfig`
//! - `RUST_LOG` overrides the configured filter
//!
//! The returned `Dispatch` is installed as the global default by `main` and
//! handed to the logging middleware, so both write to the same sink.

use tracing::Dispatch;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the dispatcher: env filter plus a fmt layer writing to stderr.
pub fn build_dispatch(config: &LoggingConfig) -> Dispatch {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Full => Dispatch::new(registry.with(fmt::layer().with_writer(std::io::stderr))),
        LogFormat::Compact => Dispatch::new(
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_for_every_format() {
        for format in [LogFormat::Full, LogFormat::Compact] {
            let config = LoggingConfig {
                format,
                ..LoggingConfig::default()
            };
            let dispatch = build_dispatch(&config);
            tracing::dispatcher::with_default(&dispatch, || {
                tracing::info!(format = ?format, "dispatcher built");
            });
        }
    }
}
