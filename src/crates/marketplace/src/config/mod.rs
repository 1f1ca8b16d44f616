//! Configuration module for marketplace
//!
//! Server configuration (listen address, database, seed data) loaded from
//! `marketplace-server.toml`.

pub mod server;

pub use server::{
    DatabaseConfig, SeedConfig, ServerConfig, ServerConfigError, ServerInfoConfig,
};
