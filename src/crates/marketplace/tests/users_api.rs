//! Integration tests for the /users endpoints

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{app_with_db, empty_app, send, send_raw};
use serde_json::json;

fn ivan() -> serde_json::Value {
    json!({
        "first_name": "Ivan",
        "last_name": "Petrov",
        "age": 31,
        "email": "ivan@example.com",
        "role": "executor",
        "phone": "+7 900 111-22-33"
    })
}

#[tokio::test]
async fn test_create_then_get_returns_submitted_fields() {
    let app = empty_app().await;

    let created = send(&app, Method::POST, "/users", Some(ivan())).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.text(), "Ok");

    let id = created.created_id();
    let fetched = send(&app, Method::GET, &format!("/users/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);

    let mut expected = ivan();
    expected["id"] = json!(id);
    assert_eq!(fetched.json(), expected);
}

#[tokio::test]
async fn test_list_after_creates_and_deletes() {
    let app = empty_app().await;

    let mut ids = Vec::new();
    for _ in 0..5 {
        let created = send(&app, Method::POST, "/users", Some(ivan())).await;
        ids.push(created.created_id());
    }
    for id in &ids[..2] {
        let deleted = send(&app, Method::DELETE, &format!("/users/{}", id), None).await;
        assert_eq!(deleted.status, StatusCode::OK);
        assert_eq!(deleted.text(), "Ok");
    }

    let listed = send(&app, Method::GET, "/users", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.json().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_with_explicit_id() {
    let app = empty_app().await;
    let mut body = ivan();
    body["id"] = json!(77);

    let created = send(&app, Method::POST, "/users", Some(body.clone())).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.created_id(), 77);

    let duplicate = send(&app, Method::POST, "/users", Some(body)).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_missing_field_rejected() {
    let app = empty_app().await;
    let mut body = ivan();
    body.as_object_mut().unwrap().remove("email");

    let resp = send(&app, Method::POST, "/users", Some(body)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["code"], "JSON_ERROR");

    let listed = send(&app, Method::GET, "/users", None).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_create_unknown_field_rejected() {
    let app = empty_app().await;
    let mut body = ivan();
    body["nickname"] = json!("vanya");

    let resp = send(&app, Method::POST, "/users", Some(body)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = empty_app().await;

    let resp = send_raw(&app, Method::POST, "/users", Body::from("{\"first_name\": ")).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let app = empty_app().await;
    let id = send(&app, Method::POST, "/users", Some(ivan())).await.created_id();

    let replacement = json!({
        "first_name": "Анна",
        "last_name": "Смирнова",
        "age": 27,
        "email": "anna@example.com",
        "role": "customer",
        "phone": "+7 900 000-00-00"
    });
    let updated = send(&app, Method::PUT, &format!("/users/{}", id), Some(replacement.clone())).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.text(), "Ok");

    let fetched = send(&app, Method::GET, &format!("/users/{}", id), None).await;
    let mut expected = replacement;
    expected["id"] = json!(id);
    assert_eq!(fetched.json(), expected);
    assert!(fetched.text().contains("Анна"));
}

#[tokio::test]
async fn test_partial_update_rejected_and_record_unchanged() {
    let app = empty_app().await;
    let id = send(&app, Method::POST, "/users", Some(ivan())).await.created_id();

    let resp = send(&app, Method::PUT, &format!("/users/{}", id), Some(json!({"age": 40}))).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let fetched = send(&app, Method::GET, &format!("/users/{}", id), None).await;
    assert_eq!(fetched.json()["age"], 31);
}

#[tokio::test]
async fn test_update_with_mismatched_body_id_rejected() {
    let app = empty_app().await;
    let id = send(&app, Method::POST, "/users", Some(ivan())).await.created_id();
    let mut body = ivan();
    body["id"] = json!(id + 1);

    let resp = send(&app, Method::PUT, &format!("/users/{}", id), Some(body)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let app = empty_app().await;

    let get = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.json()["error"], "NotFound");

    let put = send(&app, Method::PUT, "/users/999", Some(ivan())).await;
    assert_eq!(put.status, StatusCode::NOT_FOUND);

    let delete = send(&app, Method::DELETE, "/users/999", None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = empty_app().await;

    let resp = send(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = empty_app().await;

    let resp = send(&app, Method::GET, "/health", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["database"], "connected");
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let (app, db) = app_with_db().await;
    db.pool().close().await;

    let resp = send(&app, Method::POST, "/users", Some(ivan())).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json()["code"], "DB_ERROR");
    assert_eq!(resp.json()["error"], "DatabaseError");

    let list = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
}
