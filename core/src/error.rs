//! Error types for the fake store client.
//!
//! # Design
//! The endpoint clients only fail on transport problems; a non-2xx status is
//! data, not an error. `NotFound` and `UnexpectedStatus` are produced solely
//! by the opt-in `HttpResponse::ensure_status`. Deserialization failures keep
//! the target type name and the offending payload so a failing assertion
//! shows what the server actually sent.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpMethod;

/// Boxed error produced by a `Transport` implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the client, the JSON helpers and the transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 where another status was expected.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status outside the expected set.
    #[error("unexpected HTTP {status} (expected one of {expected:?}): {body}")]
    UnexpectedStatus {
        status: u16,
        expected: Vec<u16>,
        body: String,
    },

    /// The request never produced a response.
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: HttpMethod,
        url: String,
        #[source]
        source: BoxError,
    },

    /// A value could not be serialized to JSON.
    #[error("failed to serialize {target}: {source}")]
    Serialization {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A payload could not be deserialized into the expected type.
    #[error("failed to deserialize {target}: {source}; payload: {payload}")]
    Deserialization {
        target: &'static str,
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a JSON file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
