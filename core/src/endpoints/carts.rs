use crate::client::StoreClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};
use crate::transport::Transport;
use crate::types::{CartRequest, ListQuery, SortOrder};

const CARTS: &str = "/carts";

/// Calls against `/carts`.
#[derive(Debug)]
pub struct CartsApi<'a, T> {
    client: &'a StoreClient<T>,
}

impl<'a, T: Transport> CartsApi<'a, T> {
    pub(crate) fn new(client: &'a StoreClient<T>) -> Self {
        Self { client }
    }

    pub fn list_all(&self) -> Result<HttpResponse, ApiError> {
        self.client.send("Get all carts", self.client.request(HttpMethod::Get, CARTS))
    }

    pub fn list(&self, query: &ListQuery) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, CARTS);
        request.query = query.to_pairs();
        self.client.send("Get carts", request)
    }

    pub fn limit(&self, limit: u32) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, CARTS);
        request.query = ListQuery::limit(limit).to_pairs();
        self.client.send(&format!("Get limited carts: {limit}"), request)
    }

    pub fn sorted_by(&self, order: SortOrder) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, CARTS);
        request.query = ListQuery::sorted(order).to_pairs();
        self.client.send(&format!("Get sorted carts: {}", order.as_str()), request)
    }

    /// Carts dated between `start` and `end` (`YYYY-MM-DD`), both inclusive.
    pub fn between_dates(&self, start: &str, end: &str) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, CARTS);
        request.query = ListQuery {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..ListQuery::default()
        }
        .to_pairs();
        self.client
            .send(&format!("Get carts between {start} and {end}"), request)
    }

    /// `GET /carts/user/{user_id}`.
    pub fn for_user(&self, user_id: u32) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .request(HttpMethod::Get, &format!("{CARTS}/user/{user_id}"));
        self.client.send(&format!("Get carts for user ID: {user_id}"), request)
    }

    pub fn get_by_id(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self.client.request(HttpMethod::Get, &format!("{CARTS}/{id}"));
        self.client.send(&format!("Get cart by ID: {id}"), request)
    }

    pub fn create(&self, cart: &CartRequest) -> Result<HttpResponse, ApiError> {
        let request = self.client.json_request(HttpMethod::Post, CARTS, cart)?;
        self.client.send("Create new cart", request)
    }

    pub fn update(&self, id: u32, cart: &CartRequest) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .json_request(HttpMethod::Put, &format!("{CARTS}/{id}"), cart)?;
        self.client.send(&format!("Update cart with ID: {id}"), request)
    }

    pub fn delete(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self.client.request(HttpMethod::Delete, &format!("{CARTS}/{id}"));
        self.client.send(&format!("Delete cart with ID: {id}"), request)
    }
}
