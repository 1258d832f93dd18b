//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each case names an operation, its inputs, the request the client must put
//! on the wire, a simulated response, and either the expected parsed record or
//! the expected status error. Bodies are compared as parsed JSON so field order
//! never matters.

use fakestore_core::{
    ApiError, Cart, CartRequest, HttpMethod, HttpRequest, HttpResponse, Product, ProductRequest,
    ReplayTransport, SortOrder, StoreClient, User, UserRequest,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_sort(s: &str) -> SortOrder {
    match s {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        other => panic!("unknown sort order: {other}"),
    }
}

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn input<T: DeserializeOwned>(case: &Value) -> T {
    serde_json::from_value(case["input"].clone()).unwrap()
}

fn id(case: &Value) -> u32 {
    case["input_id"].as_u64().unwrap() as u32
}

fn replay(case: &Value) -> ReplayTransport {
    let sim = &case["simulated_response"];
    let transport = ReplayTransport::new(Vec::new());
    transport.push(sim["status"].as_u64().unwrap() as u16, sim["body"].as_str().unwrap());
    transport
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
    assert_eq!(req.query, pairs(&expected["query"]), "{name}: query");
    assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");

    match req.body.as_deref() {
        Some(body) => {
            let body: Value = serde_json::from_str(body).unwrap();
            assert_eq!(body, expected["body"], "{name}: body");
        }
        None => assert!(expected["body"].is_null(), "{name}: body should be None"),
    }
}

fn check_response<T>(name: &str, response: HttpResponse, case: &Value)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_status_error") {
        let err = response.ensure_status(&[200]).unwrap_err();
        match expected_error.as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
            other => panic!("{name}: unknown expected_status_error: {other}"),
        }
    } else {
        assert!(response.is_success(), "{name}: expected success, got {}", response.status);
        let parsed: T = response.json().unwrap();
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(parsed, expected, "{name}: parsed result");
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[test]
fn users_test_vectors() {
    for case in cases(include_str!("../../test-vectors/users.json")) {
        let name = case["name"].as_str().unwrap();
        let transport = replay(&case);
        let client = StoreClient::with_transport(BASE_URL, &transport);
        let users = client.users();

        let operation = case["operation"].as_str().unwrap();
        let response = match operation {
            "get_by_id" => users.get_by_id(id(&case)),
            "create" => users.create(&input::<UserRequest>(&case)),
            "update" => users.update(id(&case), &input::<UserRequest>(&case)),
            "delete" => users.delete(id(&case)),
            "sorted_by" => users.sorted_by(parse_sort(case["input_sort"].as_str().unwrap())),
            other => panic!("{name}: unknown operation: {other}"),
        }
        .unwrap();

        check_request(name, &transport.last_request().unwrap(), &case["expected_request"]);
        if operation == "sorted_by" {
            check_response::<Vec<User>>(name, response, &case);
        } else {
            check_response::<User>(name, response, &case);
        }
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[test]
fn products_test_vectors() {
    for case in cases(include_str!("../../test-vectors/products.json")) {
        let name = case["name"].as_str().unwrap();
        let transport = replay(&case);
        let client = StoreClient::with_transport(BASE_URL, &transport);
        let products = client.products();

        let operation = case["operation"].as_str().unwrap();
        let response = match operation {
            "get_by_id" => products.get_by_id(id(&case)),
            "create" => products.create(&input::<ProductRequest>(&case)),
            "patch" => products.patch(id(&case), &input::<ProductRequest>(&case)),
            "limit" => products.limit(case["input_limit"].as_u64().unwrap() as u32),
            "by_category" => products.by_category(case["input_category"].as_str().unwrap()),
            other => panic!("{name}: unknown operation: {other}"),
        }
        .unwrap();

        check_request(name, &transport.last_request().unwrap(), &case["expected_request"]);
        match operation {
            "limit" | "by_category" => check_response::<Vec<Product>>(name, response, &case),
            _ => check_response::<Product>(name, response, &case),
        }
    }
}

// ---------------------------------------------------------------------------
// Carts
// ---------------------------------------------------------------------------

#[test]
fn carts_test_vectors() {
    for case in cases(include_str!("../../test-vectors/carts.json")) {
        let name = case["name"].as_str().unwrap();
        let transport = replay(&case);
        let client = StoreClient::with_transport(BASE_URL, &transport);
        let carts = client.carts();

        let operation = case["operation"].as_str().unwrap();
        let response = match operation {
            "get_by_id" => carts.get_by_id(id(&case)),
            "create" => carts.create(&input::<CartRequest>(&case)),
            "for_user" => carts.for_user(id(&case)),
            "limit" => carts.limit(case["input_limit"].as_u64().unwrap() as u32),
            "between_dates" => carts.between_dates(
                case["input_start"].as_str().unwrap(),
                case["input_end"].as_str().unwrap(),
            ),
            other => panic!("{name}: unknown operation: {other}"),
        }
        .unwrap();

        check_request(name, &transport.last_request().unwrap(), &case["expected_request"]);
        match operation {
            "get_by_id" | "create" => check_response::<Cart>(name, response, &case),
            _ => check_response::<Vec<Cart>>(name, response, &case),
        }
    }
}
