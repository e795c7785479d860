//! Canonical query-string builder for API method calls.
//!
//! # Design
//! Each method declares its parameters in a fixed order; the builder emits
//! them in exactly that order, then appends `v` and `access_token` last.
//! Required parameters are always emitted, even for falsy values such as
//! `0`; optional parameters are emitted only when present and non-empty.
//! Missing required parameters cannot occur at runtime: required values are
//! plain (non-`Option`) arguments on the category methods.
//!
//! Values are NOT percent-encoded. The legacy wire format passes spaces and
//! non-ASCII text through literally, and the recorded request URLs depend on
//! that, so escaping is left to transports that need strict RFC-3986 URLs.

use std::fmt::Display;

/// An API method name plus its ordered parameter list.
#[derive(Debug, Clone)]
pub(crate) struct MethodQuery {
    method: &'static str,
    params: Vec<(&'static str, String)>,
}

impl MethodQuery {
    pub(crate) fn new(method: &'static str) -> Self {
        Self {
            method,
            params: Vec::new(),
        }
    }

    pub(crate) fn method(&self) -> &'static str {
        self.method
    }

    /// Required parameter: always emitted, falsy values included.
    pub(crate) fn param(mut self, key: &'static str, value: impl Display) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Optional parameter: emitted only when `Some` and non-empty once
    /// rendered.
    pub(crate) fn opt(mut self, key: &'static str, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            let rendered = value.to_string();
            if !rendered.is_empty() {
                self.params.push((key, rendered));
            }
        }
        self
    }

    /// Wire-boolean request parameter: emitted as `1` when set, omitted
    /// entirely when unset.
    pub(crate) fn flag(mut self, key: &'static str, value: bool) -> Self {
        if value {
            self.params.push((key, "1".to_string()));
        }
        self
    }

    /// Render the full request URL: method path, declared parameters in
    /// order, then `v` and `access_token` as the final two parameters.
    pub(crate) fn into_url(self, base_url: &str, version: &str, access_token: &str) -> String {
        let mut url = format!("{}/method/{}?", base_url, self.method);
        for (key, value) in &self.params {
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
        url.push_str("v=");
        url.push_str(version);
        url.push_str("&access_token=");
        url.push_str(access_token);
        url
    }
}
