//! Client configuration read from the environment.

use std::env;

use crate::error::ApiError;

/// Public fake store API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Log request and response bodies at debug level.
    pub log_bodies: bool,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Configuration(format!(
                "base URL must start with http:// or https://, got `{base_url}`"
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            log_bodies: false,
        })
    }

    /// Read `FAKESTORE_BASE_URL` and `FAKESTORE_LOG_BODIES`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("FAKESTORE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_bodies = env::var("FAKESTORE_LOG_BODIES")
            .ok()
            .is_some_and(|value| parse_flag(&value));

        Ok(Self {
            log_bodies,
            ..Self::new(&base_url)?
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_bodies: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
