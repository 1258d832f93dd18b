//! Blocking client for the fake store API.
//!
//! # Design
//! `StoreClient` holds the base URL, a `Transport` and any registered
//! observers. It carries no mutable state between calls. The per-resource
//! handles returned by `users()`, `products()` and `carts()` build one
//! `HttpRequest` per operation and pass it through `send`, which logs the
//! call, notifies observers and returns the raw `HttpResponse`. A non-2xx
//! status is returned as data, never as an error.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::config::ClientConfig;
use crate::endpoints::{CartsApi, ProductsApi, UsersApi};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::json;
use crate::observer::CallObserver;
use crate::transport::{Transport, UreqTransport};

const JSON: &str = "application/json";

/// Client for the users, products and carts resources.
pub struct StoreClient<T = UreqTransport> {
    base_url: String,
    log_bodies: bool,
    transport: T,
    observers: Vec<Arc<dyn CallObserver>>,
}

impl StoreClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url).log_bodies(config.log_bodies)
    }
}

impl<T: Transport> StoreClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_bodies: false,
            transport,
            observers: Vec::new(),
        }
    }

    pub fn log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Register an observer notified around every call, in registration order.
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_, T> {
        ProductsApi::new(self)
    }

    pub fn carts(&self) -> CartsApi<'_, T> {
        CartsApi::new(self)
    }

    /// A bodiless request for `path`, which must start with `/`.
    pub(crate) fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            query: Vec::new(),
            headers: vec![("accept".to_string(), JSON.to_string())],
            body: None,
        }
    }

    pub(crate) fn json_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let mut request = self.request(method, path);
        request.headers.push(("content-type".to_string(), JSON.to_string()));
        request.body = Some(json::to_wire(body)?);
        Ok(request)
    }

    /// Execute `request` exactly once under the given step label.
    pub(crate) fn send(&self, step: &str, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let span = info_span!("api_call", step, method = %request.method, url = %request.url());
        let _guard = span.enter();

        if self.log_bodies {
            if let Some(body) = &request.body {
                debug!(body = %body, "request body");
            }
        }
        for observer in &self.observers {
            observer.on_request(step, &request);
        }

        match self.transport.execute(&request) {
            Ok(response) => {
                info!(status = response.status, "response received");
                if self.log_bodies {
                    debug!(body = %response.body, "response body");
                }
                for observer in &self.observers {
                    observer.on_response(step, &request, &response);
                }
                Ok(response)
            }
            Err(error) => {
                warn!(%error, "request failed");
                for observer in &self.observers {
                    observer.on_error(step, &request, &error);
                }
                Err(error)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StoreClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url)
            .field("log_bodies", &self.log_bodies)
            .field("transport", &self.transport)
            .field("observers", &self.observers.len())
            .finish()
    }
}
