//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Service middleware produces:
//!     → logging.rs (structured log events via the injected Dispatch)
//!     → metrics.rs (counters, histograms via the injected Recorder)
//!
//! Consumers:
//!     → stderr (log aggregation)
//!     → GET /metrics (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Sinks are built once at startup and passed down explicitly
//! - Request ID (`x-request-id`) is attached by the HTTP layer, not here

pub mod logging;
pub mod metrics;
