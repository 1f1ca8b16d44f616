//! CRUD REST service for marketplace users, orders and offers
//!
//! Maps HTTP verb + path onto create/read/update/delete operations against
//! three SQLite tables, with JSON request and response bodies.

pub mod api;
pub mod config;
pub mod db;
pub mod seed;
pub mod version;

pub use api::create_router;
pub use config::ServerConfig;
pub use db::DatabaseConnection;
pub use seed::{load_seed_data, SeedData, SeedError};
