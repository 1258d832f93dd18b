//! In-process stand-in for the fake store API.
//!
//! Serves a fixed seed catalogue. Write calls behave like the public API:
//! the payload is echoed back with an id and nothing is persisted, so every
//! test sees the same data regardless of order.

mod data;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: Name,
    pub address: Address,
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Name {
    pub firstname: String,
    pub lastname: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub number: u32,
    pub zipcode: String,
    pub geolocation: Geolocation,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Geolocation {
    pub lat: String,
    pub long: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: u32,
    pub user_id: u32,
    pub date: String,
    pub products: Vec<CartItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: u32,
    pub quantity: u32,
}

/// The catalogue served by the router.
#[derive(Clone, Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub carts: Vec<Cart>,
}

impl Store {
    pub fn seeded() -> Self {
        data::seeded_store()
    }
}

/// Listing modifiers shared by every collection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub sort: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<u32>,
    pub startdate: Option<String>,
    pub enddate: Option<String>,
}

pub type Db = Arc<Store>;

type Payload = Map<String, Value>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(store);
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/products", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route("/products/category/{category}", get(products_in_category))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .route("/carts", get(list_carts).post(create_cart))
        .route("/carts/user/{user_id}", get(carts_for_user))
        .route("/carts/{id}", get(get_cart).put(update_cart).delete(delete_cart))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- users ---

async fn list_users(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<User>> {
    let users: Vec<User> = db
        .users
        .iter()
        .filter(|user| params.user_id.map_or(true, |id| user.id == id))
        .cloned()
        .collect();
    Json(arrange(users, |user| user.id, &params))
}

async fn get_user(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<User>, StatusCode> {
    find(&db.users, |user| user.id == id).map(Json)
}

async fn create_user(State(db): State<Db>, Json(body): Json<Payload>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(with_id(body, next_id(db.users.len()))))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(body): Json<Payload>,
) -> Result<Json<Value>, StatusCode> {
    find(&db.users, |user| user.id == id)?;
    Ok(Json(with_id(body, id)))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<User>, StatusCode> {
    find(&db.users, |user| user.id == id).map(Json)
}

// --- products ---

async fn list_products(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Product>> {
    Json(arrange(db.products.clone(), |product| product.id, &params))
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<String>> {
    let mut categories: Vec<String> = Vec::new();
    for product in &db.products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    Json(categories)
}

async fn products_in_category(
    State(db): State<Db>,
    Path(category): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Product>> {
    let products: Vec<Product> = db
        .products
        .iter()
        .filter(|product| product.category == category)
        .cloned()
        .collect();
    Json(arrange(products, |product| product.id, &params))
}

async fn get_product(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Product>, StatusCode> {
    find(&db.products, |product| product.id == id).map(Json)
}

async fn create_product(State(db): State<Db>, Json(body): Json<Payload>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(with_id(body, next_id(db.products.len()))))
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(body): Json<Payload>,
) -> Result<Json<Value>, StatusCode> {
    find(&db.products, |product| product.id == id)?;
    Ok(Json(with_id(body, id)))
}

async fn patch_product(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(body): Json<Payload>,
) -> Result<Json<Value>, StatusCode> {
    let product = find(&db.products, |product| product.id == id)?;
    let Ok(Value::Object(mut merged)) = serde_json::to_value(product) else {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    };
    merged.extend(body);
    Ok(Json(with_id(merged, id)))
}

async fn delete_product(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Product>, StatusCode> {
    find(&db.products, |product| product.id == id).map(Json)
}

// --- carts ---

async fn list_carts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Cart>> {
    let carts: Vec<Cart> = db
        .carts
        .iter()
        .filter(|cart| params.user_id.map_or(true, |id| cart.user_id == id))
        .filter(|cart| within_dates(&cart.date, &params))
        .cloned()
        .collect();
    Json(arrange(carts, |cart| cart.id, &params))
}

async fn carts_for_user(State(db): State<Db>, Path(user_id): Path<u32>) -> Json<Vec<Cart>> {
    Json(
        db.carts
            .iter()
            .filter(|cart| cart.user_id == user_id)
            .cloned()
            .collect(),
    )
}

async fn get_cart(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Cart>, StatusCode> {
    find(&db.carts, |cart| cart.id == id).map(Json)
}

async fn create_cart(State(db): State<Db>, Json(body): Json<Payload>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(with_id(body, next_id(db.carts.len()))))
}

async fn update_cart(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(body): Json<Payload>,
) -> Result<Json<Value>, StatusCode> {
    find(&db.carts, |cart| cart.id == id)?;
    Ok(Json(with_id(body, id)))
}

async fn delete_cart(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Cart>, StatusCode> {
    find(&db.carts, |cart| cart.id == id).map(Json)
}

// --- helpers ---

fn find<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool) -> Result<T, StatusCode> {
    items
        .iter()
        .find(|item| matches(item))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}

/// Order by id (`sort=desc` reverses), then apply `limit`.
fn arrange<T>(mut items: Vec<T>, id: impl Fn(&T) -> u32, params: &ListParams) -> Vec<T> {
    items.sort_by_key(|item| id(item));
    if params.sort.as_deref() == Some("desc") {
        items.reverse();
    }
    if let Some(limit) = params.limit {
        items.truncate(limit);
    }
    items
}

/// Inclusive date-range check on the `YYYY-MM-DD` prefix.
fn within_dates(date: &str, params: &ListParams) -> bool {
    let day = day_of(date);
    params.startdate.as_deref().map_or(true, |start| day >= day_of(start))
        && params.enddate.as_deref().map_or(true, |end| day <= day_of(end))
}

fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

fn next_id(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |len| len.saturating_add(1))
}

fn with_id(mut body: Payload, id: u32) -> Value {
    body.insert("id".to_string(), Value::from(id));
    Value::Object(body)
}
