//! Response envelope handling and the field-level coercion helpers.
//!
//! # Design
//! Every reply is an envelope holding either a `response` key or an `error`
//! key. `extract_response` peels the envelope; the typed helpers below then
//! map the inner value through one of three shapes:
//! - scalar (a bare integer, where `1`/`0` may stand in for a boolean),
//! - paged collection (`{"count": n, "items": [...]}`),
//! - bare array (used by save endpoints that carry no count).
//!
//! `count` is informational only — the service does not guarantee it equals
//! `items.len()`, and nothing here validates it.
//!
//! The serde deserializers at the bottom are the single place wire quirks
//! are decoded: integer-encoded booleans, epoch-seconds timestamps rendered
//! in local time, and geo coordinates narrowed through single precision.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::de::{self, DeserializeOwned, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Error, MappingError};

/// Unwrap the envelope: an `error` key becomes `Error::Api`, a `response`
/// key yields the inner value, anything else is a mapping failure.
pub(crate) fn extract_response(body: &str) -> Result<Value, Error> {
    let mut envelope: Value = serde_json::from_str(body).map_err(|e| {
        log::warn!("response body is not valid JSON: {e}");
        MappingError::Json(e)
    })?;
    if let Some(error) = envelope.get_mut("error") {
        let fault: ApiError = serde_json::from_value(error.take()).map_err(MappingError::Json)?;
        return Err(fault.into());
    }
    match envelope.get_mut("response") {
        Some(response) => Ok(response.take()),
        None => Err(MappingError::MissingResponse.into()),
    }
}

/// Map the `response` value into a typed entity, paged collection, or bare
/// array.
pub(crate) fn object<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let response = extract_response(body)?;
    serde_json::from_value(response).map_err(|e| MappingError::Json(e).into())
}

/// Scalar integer response.
pub(crate) fn scalar_i64(body: &str) -> Result<i64, Error> {
    let response = extract_response(body)?;
    response
        .as_i64()
        .ok_or_else(|| MappingError::Shape(format!("expected an integer response, got {response}")).into())
}

/// Scalar wire-boolean response: `1` means success, `0` failure.
pub(crate) fn scalar_bool(body: &str) -> Result<bool, Error> {
    match scalar_i64(body)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(MappingError::Shape(format!("expected a 0/1 response, got {other}")).into()),
    }
}

/// Decode an integer-encoded boolean. The wire never carries JSON `true` /
/// `false` for these fields, so a native boolean is rejected as a type
/// mismatch rather than silently accepted.
pub(crate) fn wire_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u64::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(de::Error::invalid_value(
            Unexpected::Unsigned(other),
            &"a 0/1 wire boolean",
        )),
    }
}

/// `wire_bool` for optional fields; absence is handled by `#[serde(default)]`.
pub(crate) fn wire_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    wire_bool(deserializer).map(Some)
}

/// Decode Unix epoch seconds into the caller's local timezone.
pub(crate) fn unix_seconds<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    let utc = Utc
        .timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| de::Error::custom(format!("timestamp {seconds} is out of range")))?;
    Ok(utc.with_timezone(&Local))
}
