//! Order model for database persistence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posted by a customer and carried out by an executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Primary key
    pub id: i64,

    pub name: String,

    pub description: String,

    /// First day of the job
    pub start_date: NaiveDate,

    /// Last day of the job
    pub end_date: NaiveDate,

    pub address: String,

    pub price: i64,

    /// References users.id (not enforced)
    pub customer_id: i64,

    /// References users.id (not enforced)
    pub executor_id: i64,
}

/// Every order column except the primary key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}
