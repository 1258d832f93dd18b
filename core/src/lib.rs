//! Blocking API client for the fake store e-commerce service.
//!
//! # Overview
//! Typed models for users, products and carts, one endpoint handle per
//! resource, JSON helpers, and a flattened product view with in-memory
//! filters. Endpoint calls return the raw `HttpResponse`; deciding whether a
//! status is acceptable is left to the caller.
//!
//! # Design
//! - `StoreClient` is stateless apart from its base URL, transport and
//!   observers.
//! - All network I/O goes through the `Transport` trait, so contract tests
//!   can swap `UreqTransport` for `ReplayTransport`.
//! - Models are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod json;
pub mod observer;
pub mod transport;
pub mod types;

pub use catalog::{ProductCatalog, ProductView, HIGH_RATING_THRESHOLD};
pub use client::StoreClient;
pub use config::ClientConfig;
pub use endpoints::{CartsApi, ProductsApi, UsersApi};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use observer::CallObserver;
pub use transport::{ReplayTransport, Transport, UreqTransport};
pub use types::{
    Address, Cart, CartItem, CartRequest, Geolocation, ListQuery, Name, Product, ProductRequest, Rating,
    SortOrder, User, UserRequest,
};
