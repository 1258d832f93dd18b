//! Request and response models for the fake store API.
//!
//! # Design
//! Response records keep every field optional: the API echoes partial
//! objects from write calls and may grow new keys at any time, which serde
//! ignores. Request payloads are `Default` so callers set only the fields
//! they mean to send; `None` fields are never serialized, keeping partial
//! updates from overwriting server values with nulls.

mod cart;
mod product;
mod user;

pub use cart::{Cart, CartItem, CartRequest};
pub use product::{Product, ProductRequest, Rating};
pub use user::{Address, Geolocation, Name, User, UserRequest};

/// Ordering accepted by the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query modifiers for collection listings.
///
/// Unset fields are left out of the query string. Not every resource honours
/// every field: `start_date`/`end_date` only apply to carts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
    pub user_id: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn sorted(order: SortOrder) -> Self {
        Self {
            sort: Some(order),
            ..Self::default()
        }
    }

    /// Query pairs in wire form, in a fixed order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.as_str().to_string()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("userId".to_string(), user_id.to_string()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("startdate".to_string(), start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("enddate".to_string(), end.clone()));
        }
        pairs
    }
}
