//! Common test utilities and setup

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use marketplace::api::create_router;
use marketplace::db::DatabaseConnection;
use marketplace::seed::{load_seed_data, SeedData};
use serde_json::Value;
use tower::ServiceExt;

/// Response pieces the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }

    /// Id of a freshly created record, taken from the Location header
    pub fn created_id(&self) -> i64 {
        let location = self.headers[header::LOCATION]
            .to_str()
            .expect("Location is not ASCII");
        location
            .rsplit('/')
            .next()
            .and_then(|id| id.parse().ok())
            .expect("Location does not end in an id")
    }
}

/// Router over an empty in-memory store
pub async fn empty_app() -> Router {
    app_with_db().await.0
}

/// Router plus a handle on its store, for tests that break the store
pub async fn app_with_db() -> (Router, DatabaseConnection) {
    let db = DatabaseConnection::in_memory()
        .await
        .expect("Failed to create test database");
    (create_router(db.clone()), db)
}

/// Router over an in-memory store holding the built-in seed data
pub async fn seeded_app() -> (Router, SeedData) {
    let db = DatabaseConnection::in_memory()
        .await
        .expect("Failed to create test database");
    let seed = SeedData::builtin().expect("Built-in seed data is invalid");
    load_seed_data(&db, &seed)
        .await
        .expect("Failed to load seed data");
    (create_router(db), seed)
}

/// Send one request through the router
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    send_raw(app, method, uri, body).await
}

/// Send one request with a body that is not necessarily JSON
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Body) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond");

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse { status, headers, body }
}
