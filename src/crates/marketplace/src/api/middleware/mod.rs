//! API middleware layer
//!
//! Provides middleware for request processing including CORS, logging, and validation.

pub mod cors;
pub mod logging;
pub mod validation;

pub use cors::cors_layer;
pub use logging::logging_layer;
pub use validation::{ensure_matching_id, parse_date, parse_id};
