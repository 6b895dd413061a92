//! String service library.
//!
//! Two string operations served over JSON/HTTP, layered as
//! transport → endpoint → (instrumenting → logging →) service.

pub mod config;
pub mod endpoint;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use config::ServiceConfig;
pub use endpoint::Endpoints;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::{BasicStringService, ServiceError, StringService};
