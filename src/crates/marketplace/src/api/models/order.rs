//! Order API models and DTOs
//!
//! Dates travel as `YYYY-MM-DD` text in both directions.

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::middleware::validation::{parse_date, DATE_FORMAT};
use crate::db::models::{NewOrder, Order};

/// Body of `POST /orders` and `PUT /orders/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderPayload {
    /// Explicit primary key (optional)
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl OrderPayload {
    /// Parse the date fields and split into the optional id and the column values
    pub fn into_parts(self) -> ApiResult<(Option<i64>, NewOrder)> {
        let start_date = parse_date(&self.start_date, "start_date")?;
        let end_date = parse_date(&self.end_date, "end_date")?;

        Ok((
            self.id,
            NewOrder {
                name: self.name,
                description: self.description,
                start_date,
                end_date,
                address: self.address,
                price: self.price,
                customer_id: self.customer_id,
                executor_id: self.executor_id,
            },
        ))
    }
}

/// Order response for API, with dates rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl OrderResponse {
    /// Create an OrderResponse from database Order model
    pub fn from_db_order(order: Order) -> Self {
        Self {
            id: order.id,
            name: order.name,
            description: order.description,
            start_date: order.start_date.format(DATE_FORMAT).to_string(),
            end_date: order.end_date.format(DATE_FORMAT).to_string(),
            address: order.address,
            price: order.price,
            customer_id: order.customer_id,
            executor_id: order.executor_id,
        }
    }
}
