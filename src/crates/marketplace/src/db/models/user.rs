//! User model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A marketplace participant, acting as customer or executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Primary key
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    /// Free-form role label, e.g. "customer" or "executor"
    pub role: String,
    pub phone: String,
}

/// Every user column except the primary key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}
