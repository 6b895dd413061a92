//! Endpoint adapters.
//!
//! An endpoint turns a typed request into a typed response by calling the
//! service. Service errors never escape an endpoint: they are written into
//! the response's `err` field, so the transport always has a body to encode.

pub mod types;

use std::sync::Arc;

pub use types::{CountRequest, CountResponse, UppercaseRequest, UppercaseResponse};

use crate::service::{count_value, StringService};

/// Uniform invocation signature used by the transport layer.
pub type Endpoint<Req, Resp> = Arc<dyn Fn(Req) -> Resp + Send + Sync>;

/// All endpoints of the service, cheap to clone into handler state.
#[derive(Clone)]
pub struct Endpoints {
    pub uppercase: Endpoint<UppercaseRequest, UppercaseResponse>,
    pub count: Endpoint<CountRequest, CountResponse>,
}

impl Endpoints {
    pub fn new(svc: Arc<dyn StringService>) -> Self {
        Self {
            uppercase: make_uppercase_endpoint(svc.clone()),
            count: make_count_endpoint(svc),
        }
    }
}

pub fn make_uppercase_endpoint(
    svc: Arc<dyn StringService>,
) -> Endpoint<UppercaseRequest, UppercaseResponse> {
    Arc::new(move |req: UppercaseRequest| match svc.uppercase(&req.s) {
        Ok(v) => UppercaseResponse { v, err: String::new() },
        Err(e) => UppercaseResponse {
            v: String::new(),
            err: e.to_string(),
        },
    })
}

pub fn make_count_endpoint(svc: Arc<dyn StringService>) -> Endpoint<CountRequest, CountResponse> {
    Arc::new(move |req: CountRequest| {
        let result = svc.count(&req.s);
        CountResponse {
            v: count_value(&result),
            err: result.err().map(|e| e.to_string()).unwrap_or_default(),
        }
    })
}
