//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout, body limit)
//!     → transport.rs (decode JSON body)
//!     → endpoint (typed request → typed response)
//!     → transport.rs (encode JSON body)
//!     → Send to client
//! ```

pub mod server;
pub mod transport;

pub use server::HttpServer;
pub use transport::DecodeError;
