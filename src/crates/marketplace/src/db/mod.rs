//! Database module for marketplace
//!
//! Provides database connectivity, row models, repositories, and error
//! handling for the users, orders and offers tables.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};
