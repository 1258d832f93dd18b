//! JSON conversion helpers for models, responses and fixture files.
//!
//! Unknown keys are ignored on the way in because no model opts into
//! `deny_unknown_fields`; request payloads skip `None` fields on the way
//! out. Every failure is returned immediately, there is no partial result.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Payload excerpts in deserialization errors are cut at this many chars.
const PAYLOAD_EXCERPT_CHARS: usize = 1024;

/// Serialize `value` as indented JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|source| ApiError::Serialization {
        target: std::any::type_name::<T>(),
        source,
    })
}

/// Serialize `value` as compact JSON, the form sent on the wire.
pub fn to_wire<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|source| ApiError::Serialization {
        target: std::any::type_name::<T>(),
        source,
    })
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|source| ApiError::Deserialization {
        target: std::any::type_name::<T>(),
        payload: excerpt(text),
        source,
    })
}

pub fn from_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    from_json(&response.body)
}

pub fn from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ApiError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&text)
}

pub fn to_file<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<(), ApiError> {
    let path = path.as_ref();
    let text = to_json(value)?;
    fs::write(path, text).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Re-indent a JSON document. Input that is not valid JSON comes back as is.
pub fn pretty_print(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_string())
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(PAYLOAD_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}
