use crate::client::StoreClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};
use crate::transport::Transport;
use crate::types::{ListQuery, ProductRequest, SortOrder};

const PRODUCTS: &str = "/products";

/// Calls against `/products`.
#[derive(Debug)]
pub struct ProductsApi<'a, T> {
    client: &'a StoreClient<T>,
}

impl<'a, T: Transport> ProductsApi<'a, T> {
    pub(crate) fn new(client: &'a StoreClient<T>) -> Self {
        Self { client }
    }

    pub fn list_all(&self) -> Result<HttpResponse, ApiError> {
        self.client
            .send("Get all products", self.client.request(HttpMethod::Get, PRODUCTS))
    }

    pub fn list(&self, query: &ListQuery) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, PRODUCTS);
        request.query = query.to_pairs();
        self.client.send("Get products", request)
    }

    pub fn limit(&self, limit: u32) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, PRODUCTS);
        request.query = ListQuery::limit(limit).to_pairs();
        self.client.send(&format!("Get limited products: {limit}"), request)
    }

    pub fn sorted_by(&self, order: SortOrder) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.request(HttpMethod::Get, PRODUCTS);
        request.query = ListQuery::sorted(order).to_pairs();
        self.client
            .send(&format!("Get sorted products: {}", order.as_str()), request)
    }

    pub fn get_by_id(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self.client.request(HttpMethod::Get, &format!("{PRODUCTS}/{id}"));
        self.client.send(&format!("Get product by ID: {id}"), request)
    }

    /// `GET /products/categories`, a JSON array of category names.
    pub fn categories(&self) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .request(HttpMethod::Get, &format!("{PRODUCTS}/categories"));
        self.client.send("Get all product categories", request)
    }

    /// `GET /products/category/{category}` with the category percent-encoded.
    pub fn by_category(&self, category: &str) -> Result<HttpResponse, ApiError> {
        let path = format!("{PRODUCTS}/category/{}", urlencoding::encode(category));
        let request = self.client.request(HttpMethod::Get, &path);
        self.client
            .send(&format!("Get products in category: {category}"), request)
    }

    pub fn create(&self, product: &ProductRequest) -> Result<HttpResponse, ApiError> {
        let request = self.client.json_request(HttpMethod::Post, PRODUCTS, product)?;
        self.client.send("Create new product", request)
    }

    pub fn update(&self, id: u32, product: &ProductRequest) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .json_request(HttpMethod::Put, &format!("{PRODUCTS}/{id}"), product)?;
        self.client.send(&format!("Update product with ID: {id}"), request)
    }

    /// Partial update; only the fields set on `product` are sent.
    pub fn patch(&self, id: u32, product: &ProductRequest) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .json_request(HttpMethod::Patch, &format!("{PRODUCTS}/{id}"), product)?;
        self.client
            .send(&format!("Partially update product with ID: {id}"), request)
    }

    pub fn delete(&self, id: u32) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .request(HttpMethod::Delete, &format!("{PRODUCTS}/{id}"));
        self.client.send(&format!("Delete product with ID: {id}"), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;
    use crate::types::Product;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn category_path_is_percent_encoded() {
        let transport = ReplayTransport::default();
        transport.push(200, "[]");
        let client = StoreClient::with_transport(BASE, &transport);
        client.products().by_category("men's clothing").unwrap();

        assert_eq!(
            transport.last_request().unwrap().path,
            "http://localhost:3000/products/category/men%27s%20clothing"
        );
    }

    #[test]
    fn categories_path() {
        let transport = ReplayTransport::default();
        transport.push(200, r#"["electronics","jewelery"]"#);
        let client = StoreClient::with_transport(BASE, &transport);
        let categories: Vec<String> = client.products().categories().unwrap().json().unwrap();

        assert_eq!(categories, ["electronics", "jewelery"]);
        assert_eq!(
            transport.last_request().unwrap().path,
            "http://localhost:3000/products/categories"
        );
    }

    #[test]
    fn patch_sends_only_set_fields() {
        let transport = ReplayTransport::default();
        transport.push(200, r#"{"id":1,"title":"Patched Product Title","price":149.99}"#);
        let client = StoreClient::with_transport(BASE, &transport);
        let patch = ProductRequest {
            title: Some("Patched Product Title".to_string()),
            price: Some(149.99),
            ..Default::default()
        };
        let resp = client.products().patch(1, &patch).unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:3000/products/1");
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"title":"Patched Product Title","price":149.99}"#)
        );
        let product: Product = resp.json().unwrap();
        assert_eq!(product.title, patch.title);
    }

    #[test]
    fn create_posts_to_collection() {
        let transport = ReplayTransport::default();
        transport.push(201, r#"{"id":21,"title":"Test Product"}"#);
        let client = StoreClient::with_transport(BASE, &transport);
        let resp = client
            .products()
            .create(&ProductRequest {
                title: Some("Test Product".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(resp.status, 201);
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/products");
    }

    #[test]
    fn update_and_delete_target_the_item() {
        let transport = ReplayTransport::default();
        transport.push(200, "{}");
        transport.push(200, "{}");
        let client = StoreClient::with_transport(BASE, &transport);
        client.products().update(4, &ProductRequest::default()).unwrap();
        client.products().delete(4).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].body.as_deref(), Some("{}"));
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].path, "http://localhost:3000/products/4");
    }
}
