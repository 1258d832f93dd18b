//! Hooks invoked around every endpoint call.
//!
//! Each call carries a step label such as `"Get product by ID: 1"` so a
//! reporting layer can record calls without the clients knowing about it.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Receives a notification before and after each endpoint call.
///
/// All methods default to doing nothing.
pub trait CallObserver: Send + Sync {
    fn on_request(&self, _step: &str, _request: &HttpRequest) {}

    fn on_response(&self, _step: &str, _request: &HttpRequest, _response: &HttpResponse) {}

    fn on_error(&self, _step: &str, _request: &HttpRequest, _error: &ApiError) {}
}
