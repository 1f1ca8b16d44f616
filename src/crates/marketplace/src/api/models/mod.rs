//! API data transfer objects (DTOs) and response models
//!
//! Request payloads reject unknown keys and require every field except `id`.

pub mod offer;
pub mod order;
pub mod user;

pub use offer::{OfferPayload, OfferResponse};
pub use order::{OrderPayload, OrderResponse};
pub use user::{UserPayload, UserResponse};

/// Service health response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// API version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn new(status: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            database: database.into(),
            version: crate::version::VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
