//! Request validation utilities
//!
//! Path ids and date text are validated here before anything touches the
//! store. Field presence and unknown keys are enforced by serde on the
//! payload types.

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};

/// Wire format for calendar dates in requests and responses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a record id taken from the request path
pub fn parse_id(value: &str, resource: &str) -> ApiResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", resource, value)))
}

/// Parse `YYYY-MM-DD` text into a calendar date
pub fn parse_date(value: &str, field_name: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ApiError::BadRequest(format!(
            "{} must be a date in YYYY-MM-DD format, got {:?}",
            field_name, value
        ))
    })
}

/// Reject an update whose body names a different record than its path
pub fn ensure_matching_id(body_id: Option<i64>, path_id: i64) -> ApiResult<()> {
    match body_id {
        Some(id) if id != path_id => Err(ApiError::BadRequest(format!(
            "Body id {} does not match path id {}",
            id, path_id
        ))),
        _ => Ok(()),
    }
}
