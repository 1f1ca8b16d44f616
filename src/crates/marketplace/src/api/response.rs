//! API response helpers
//!
//! Successful writes answer with the plain acknowledgement text instead of
//! echoing the affected record; reads answer with bare JSON.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// Body returned by every successful create, update and delete
pub const ACKNOWLEDGEMENT: &str = "Ok";

/// Create a 200 OK JSON response
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(data))
}

/// Create a 200 OK acknowledgement response
pub fn acknowledged() -> impl IntoResponse {
    (StatusCode::OK, ACKNOWLEDGEMENT)
}

/// Create a 201 Created acknowledgement pointing at the new record
pub fn created(location: String) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        ACKNOWLEDGEMENT,
    )
}
