//! String service: business logic and its middleware decorators.
//!
//! # Data Flow
//! ```text
//! endpoint
//!     → instrumenting.rs (request count, latency, count result)
//!     → logging.rs (one structured event per call)
//!     → BasicStringService (pure logic)
//! ```
//!
//! # Design Decisions
//! - Decorators implement `StringService` themselves, so any stacking order compiles
//! - Decorators never touch the returned value or error
//! - The service is synchronous: there is nothing to await inside a call

pub mod instrumenting;
pub mod logging;

use thiserror::Error;

pub use instrumenting::InstrumentingMiddleware;
pub use logging::LoggingMiddleware;

/// Value reported for `count` wherever a number is required but the call failed.
pub const COUNT_SENTINEL: i64 = -1;

/// Errors returned by string operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The input string was empty.
    #[error("Empty string")]
    EmptyInput,
}

/// Capability set exposed to endpoints.
pub trait StringService: Send + Sync {
    /// Uppercase the input.
    fn uppercase(&self, s: &str) -> Result<String, ServiceError>;

    /// Number of characters in the input.
    fn count(&self, s: &str) -> Result<usize, ServiceError>;
}

impl<T: StringService + ?Sized> StringService for std::sync::Arc<T> {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        (**self).uppercase(s)
    }

    fn count(&self, s: &str) -> Result<usize, ServiceError> {
        (**self).count(s)
    }
}

/// The undecorated implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStringService;

impl StringService for BasicStringService {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        if s.is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        Ok(s.to_uppercase())
    }

    fn count(&self, s: &str) -> Result<usize, ServiceError> {
        if s.is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        Ok(s.chars().count())
    }
}

/// Numeric view of a `count` outcome, using the sentinel on failure.
pub fn count_value(result: &Result<usize, ServiceError>) -> i64 {
    match result {
        Ok(n) => i64::try_from(*n).unwrap_or(i64::MAX),
        Err(_) => COUNT_SENTINEL,
    }
}
