//! REST API layer for the marketplace
//!
//! Provides HTTP endpoints for:
//! - User, order and offer CRUD operations
//! - Service health

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use middleware::{cors_layer, logging_layer};
pub use routes::{create_router, AppState};
