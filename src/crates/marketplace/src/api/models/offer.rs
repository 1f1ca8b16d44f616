//! Offer API models and DTOs

use serde::{Deserialize, Serialize};

use crate::db::models::{NewOffer, Offer};

/// Body of `POST /offers` and `PUT /offers/:id`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferPayload {
    /// Explicit primary key (optional)
    pub id: Option<i64>,
    pub order_id: i64,
    pub executor_id: i64,
}

impl OfferPayload {
    /// Split into the optional id and the column values
    pub fn into_parts(self) -> (Option<i64>, NewOffer) {
        (
            self.id,
            NewOffer {
                order_id: self.order_id,
                executor_id: self.executor_id,
            },
        )
    }
}

/// Offer response for API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResponse {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

impl OfferResponse {
    /// Create an OfferResponse from database Offer model
    pub fn from_db_offer(offer: Offer) -> Self {
        Self {
            id: offer.id,
            order_id: offer.order_id,
            executor_id: offer.executor_id,
        }
    }
}
