//! HTTP transport bindings.
//!
//! # Responsibilities
//! - Decode JSON request bodies into typed requests
//! - Invoke the endpoint
//! - Encode typed responses as JSON
//!
//! # Design Decisions
//! - Bodies are decoded from raw bytes, so no `Content-Type` is required
//! - Only decode failures become HTTP errors; service errors are in-band

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::endpoint::{CountRequest, Endpoint, Endpoints, UppercaseRequest};

/// The request body was not a valid JSON request. Answered with 400.
#[derive(Debug, Error)]
#[error("malformed request body: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DecodeError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub fn decode_request<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn decode_uppercase_request(body: &[u8]) -> Result<UppercaseRequest, DecodeError> {
    decode_request(body)
}

pub fn decode_count_request(body: &[u8]) -> Result<CountRequest, DecodeError> {
    decode_request(body)
}

pub fn encode_response<T: Serialize>(response: T) -> Response {
    Json(response).into_response()
}

/// Decode, call the endpoint, encode.
pub fn serve<Req, Resp: Serialize>(
    endpoint: &Endpoint<Req, Resp>,
    decode: fn(&[u8]) -> Result<Req, DecodeError>,
    body: &[u8],
) -> Result<Response, DecodeError> {
    let request = decode(body).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejecting request body");
    })?;
    Ok(encode_response(endpoint(request)))
}

pub async fn uppercase_handler(
    State(endpoints): State<Endpoints>,
    body: Bytes,
) -> Result<Response, DecodeError> {
    serve(&endpoints.uppercase, decode_uppercase_request, &body)
}

pub async fn count_handler(
    State(endpoints): State<Endpoints>,
    body: Bytes,
) -> Result<Response, DecodeError> {
    serve(&endpoints.count, decode_count_request, &body)
}
