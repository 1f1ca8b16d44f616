//! Server configuration for marketplace-server
//!
//! Loads and parses marketplace-server.toml. Every section and key is
//! optional; a missing file means "run with defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::connection::{is_in_memory, DEFAULT_MAX_CONNECTIONS};

/// Config file looked up when no explicit path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = [
    "config/marketplace-server.toml",
    "./marketplace-server.toml",
];

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Listen address and identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfoConfig {
    /// Server name for identification (reported in logs)
    pub name: String,
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerInfoConfig {
    fn default() -> Self {
        Self {
            name: "marketplace-server".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub url: String,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Seed data configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the initial rows at startup
    pub enabled: bool,
    /// Seed document to use instead of the built-in one
    pub path: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address and identification
    pub server: ServerInfoConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Seed data configuration
    pub seed: SeedConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServerConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ServerConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ServerConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path or the default locations
    ///
    /// An explicit path must exist. Without one, the first existing file in
    /// [`DEFAULT_CONFIG_PATHS`] is used, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ServerConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in DEFAULT_CONFIG_PATHS.iter().map(Path::new) {
            if path.exists() {
                tracing::info!("Loading configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ServerConfigError::InvalidConfig(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig(
                "database.url cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ServerConfigError::InvalidConfig(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get database URL from configuration
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Pool size actually used; in-memory stores always get one connection
    pub fn effective_max_connections(&self) -> u32 {
        if is_in_memory(&self.database.url) {
            1
        } else {
            self.database.max_connections
        }
    }
}
