//! Integration tests for the startup seed data

mod common;

use axum::http::{Method, StatusCode};
use chrono::NaiveDate;
use common::{seeded_app, send};
use serde_json::json;

#[tokio::test]
async fn test_users_match_seed_list() {
    let (app, seed) = seeded_app().await;

    let resp = send(&app, Method::GET, "/users", None).await;
    assert_eq!(resp.status, StatusCode::OK);

    let expected: Vec<serde_json::Value> = seed
        .users
        .iter()
        .map(|user| {
            json!({
                "id": user.id,
                "first_name": user.fields.first_name,
                "last_name": user.fields.last_name,
                "age": user.fields.age,
                "email": user.fields.email,
                "role": user.fields.role,
                "phone": user.fields.phone,
            })
        })
        .collect();
    assert_eq!(resp.json(), serde_json::Value::Array(expected));
}

#[tokio::test]
async fn test_order_dates_reformatted() {
    let (app, seed) = seeded_app().await;

    let resp = send(&app, Method::GET, "/orders", None).await;
    let orders = resp.json();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), seed.orders.len());

    for (listed, source) in orders.iter().zip(&seed.orders) {
        let start = NaiveDate::parse_from_str(&source.start_date, "%m/%d/%Y").unwrap();
        let end = NaiveDate::parse_from_str(&source.end_date, "%m/%d/%Y").unwrap();
        assert_eq!(listed["id"], source.id);
        assert_eq!(listed["start_date"], start.format("%Y-%m-%d").to_string());
        assert_eq!(listed["end_date"], end.format("%Y-%m-%d").to_string());
    }
}

#[tokio::test]
async fn test_first_seed_order() {
    let (app, _) = seeded_app().await;

    let resp = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["start_date"], "2013-02-08");
    assert_eq!(resp.json()["end_date"], "2013-05-22");
}

#[tokio::test]
async fn test_offers_match_seed_list() {
    let (app, seed) = seeded_app().await;

    let resp = send(&app, Method::GET, "/offers", None).await;
    let expected: Vec<serde_json::Value> = seed
        .offers
        .iter()
        .map(|offer| {
            json!({
                "id": offer.id,
                "order_id": offer.fields.order_id,
                "executor_id": offer.fields.executor_id,
            })
        })
        .collect();
    assert_eq!(resp.json(), serde_json::Value::Array(expected));
}

#[tokio::test]
async fn test_new_user_gets_id_after_seed_rows() {
    let (app, seed) = seeded_app().await;
    let max_seed_id = seed.users.iter().map(|u| u.id).max().unwrap();

    let created = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "first_name": "New",
            "last_name": "Comer",
            "age": 20,
            "email": "new@mail.com",
            "role": "customer",
            "phone": "000"
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.created_id() > max_seed_id);
}
