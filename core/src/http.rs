//! HTTP transport seam for the VK client.
//!
//! # Design
//! Requests and responses are plain data. The client builds fully formed
//! `HttpRequest` values and interprets `HttpResponse` values; the actual
//! network round-trip is performed by whatever `Transport` implementation the
//! caller injects. This keeps the request-building and response-mapping
//! layers deterministic and testable with canned responses, and leaves
//! timeouts, TLS, and redirect policy to the transport.

use crate::error::TransportError;

/// HTTP method for a request.
///
/// Every photos-category method is a `Get`. `Post` exists so a transport can
/// also serve the multipart upload round-trip to a previously fetched
/// `upload_url` (that exchange happens outside the API envelope and is built
/// by the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully formed HTTP request described as plain data.
///
/// `url` is complete including the query string. The query is deliberately
/// not percent-encoded (see the request builder), so transports must send it
/// as-is or escape at their own layer.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
        }
    }
}

/// An HTTP response as returned by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The external collaborator that executes HTTP round-trips.
///
/// Implementations signal network-level failures through `TransportError`.
/// A response that arrived is returned as data whatever its status; status
/// interpretation belongs to the client.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
