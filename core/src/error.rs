//! Error types for the VK API client.
//!
//! # Design
//! Three failure classes, kept distinct so callers can decide policy:
//! - `TransportError` — the HTTP round-trip itself failed (network error or
//!   an unexpected status). Propagated unchanged from the transport.
//! - `ApiError` — the service answered with its application-level `error`
//!   envelope; the remote code and message are carried verbatim.
//! - `MappingError` — the body did not match the expected shape.
//!
//! No retries happen at this layer.

use serde::Deserialize;
use thiserror::Error;

/// Any failure surfaced by a client method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),
}

/// Network-layer failure reported by a `Transport`, or a non-2xx status.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The round-trip could not be completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered outside the 2xx range. The raw body is kept for
    /// debugging.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    pub fn request(message: impl Into<String>) -> Self {
        TransportError::Request(message.into())
    }
}

/// Application-level error returned inside the envelope's `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("VK API error {error_code}: {error_msg}")]
pub struct ApiError {
    pub error_code: i64,
    pub error_msg: String,
}

/// The response body did not match any recognized shape.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Malformed JSON, or a field of an unexpected primitive type.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope carried neither a `response` nor an `error` key.
    #[error("envelope is missing the `response` key")]
    MissingResponse,

    /// The `response` value was a recognized document but not the expected
    /// variant (e.g. an object where a scalar was required).
    #[error("unexpected response shape: {0}")]
    Shape(String),
}
