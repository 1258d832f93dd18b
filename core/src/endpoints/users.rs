use crate::client::StoreClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};
use crate::transport::Transport;
use crate::types::{ListQuery, SortOrder, UserRequest};

const USERS: &str = "/users";

/// Calls against `/users`.
#[derive(Debug)]
pub struct UsersApi<'a, T> {
    client: &'a StoreClient<T>,
}

impl<'a, T: Transport> UsersApi<'a, T> {
    pub(crate) fn new(client: &'a StoreClient<T>) -> Self {
        Self { client }
    }

    pub fn list_all(&self) -> Result<HttpResponse, ApiError> {
        self.client.send("Get all users", self.client.request(HttpMethod::Get, USERS))
    }

    /// `GET /users` with the query's `limit`, `sort` and `userId` applied.
    pub fn list(&self, query: &ListQuery) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, USERS);
        request.query = query.to_pairs();
        self.client.send("Get users", request)
    }

    pub fn limit(&self, limit: u32) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, USERS);
        request.query = ListQuery::limit(limit).to_pairs();
        self.client.send(&format!("Get limited users: {limit}"), request)
    }

    pub fn sorted_by(&self, order: SortOrder) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, USERS);
        request.query = ListQuery::sorted(order).to_pairs();
        self.client.send(&format!("Get sorted users: {}", order.as_str()), request)
    }

    /// `GET /users?userId={user_id}`.
    pub fn for_user(&self, user_id: u32) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, USERS);
        request.query = ListQuery {
            user_id: Some(user_id),
            ..ListQuery::default()
        }
        .to_pairs();
        self.client.send(&format!("Get users for user ID: {user_id}"), request)
    }

    pub fn get_by_id(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self.client.request(HttpMethod::Get, &format!("{USERS}/{id}"));
        self.client.send(&format!("Get user by ID: {id}"), request)
    }

    pub fn create(&self, user: &UserRequest) -> Result<HttpResponse, ApiError> {
        let request = self.client.json_request(HttpMethod::Post, USERS, user)?;
        self.client.send("Create new user", request)
    }

    pub fn update(&self, id: u32, user: &UserRequest) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .json_request(HttpMethod::Put, &format!("{USERS}/{id}"), user)?;
        self.client.send(&format!("Update user with ID: {id}"), request)
    }

    pub fn delete(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self.client.request(HttpMethod::Delete, &format!("{USERS}/{id}"));
        self.client.send(&format!("Delete user with ID: {id}"), request)
    }
}
