//! The API entry point: configuration plus call plumbing.
//!
//! # Design
//! `VkApi` carries no mutable state — only the injected transport, the
//! base URL, the protocol version, and the access token. Every call is
//! synchronous and independent: build the URL, execute through the
//! transport, map the envelope. Callers may issue calls concurrently
//! without coordination since building and mapping are pure functions of
//! their inputs.

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{Error, TransportError};
use crate::http::{HttpRequest, Transport};
use crate::mapper;
use crate::photos::Photos;
use crate::query::MethodQuery;

pub const DEFAULT_BASE_URL: &str = "https://api.vk.com";
pub const API_VERSION: &str = "5.9";

/// Synchronous client for the VK REST API, parameterized by the transport
/// that performs the actual HTTP round-trips.
#[derive(Debug, Clone)]
pub struct VkApi<T> {
    transport: T,
    base_url: String,
    version: String,
    access_token: String,
}

impl<T: Transport> VkApi<T> {
    pub fn new(transport: T, access_token: impl Into<String>) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL, access_token)
    }

    /// Point the client at a non-default endpoint (tests, proxies).
    pub fn with_base_url(transport: T, base_url: &str, access_token: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            version: API_VERSION.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Photo albums, uploads, and search.
    pub fn photos(&self) -> Photos<'_, T> {
        Photos::new(self)
    }

    /// Execute one method call and return the raw body of a 2xx response.
    fn fetch(&self, query: MethodQuery) -> Result<String, Error> {
        // The full URL carries the access token, so only the method name is
        // logged.
        debug!("calling {}", query.method());
        let url = query.into_url(&self.base_url, &self.version, &self.access_token);
        let response = self.transport.execute(&HttpRequest::get(url))?;
        if !(200..300).contains(&response.status) {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }
        Ok(response.body)
    }

    pub(crate) fn call_object<R: DeserializeOwned>(&self, query: MethodQuery) -> Result<R, Error> {
        let body = self.fetch(query)?;
        mapper::object(&body)
    }

    pub(crate) fn call_bool(&self, query: MethodQuery) -> Result<bool, Error> {
        let body = self.fetch(query)?;
        mapper::scalar_bool(&body)
    }

    pub(crate) fn call_i64(&self, query: MethodQuery) -> Result<i64, Error> {
        let body = self.fetch(query)?;
        mapper::scalar_i64(&body)
    }
}
