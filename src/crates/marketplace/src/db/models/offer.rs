//! Offer model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An executor's offer to take on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub id: i64,
    /// References orders.id (not enforced)
    pub order_id: i64,
    /// References users.id (not enforced)
    pub executor_id: i64,
}

/// Every offer column except the primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOffer {
    pub order_id: i64,
    pub executor_id: i64,
}
