//! One handle per API resource.
//!
//! Every method issues exactly one request and returns the raw response.

mod carts;
mod products;
mod users;

pub use carts::CartsApi;
pub use products::ProductsApi;
pub use users::UsersApi;
