//! Database connection management
//!
//! Provides the SQLite connection pool, schema setup and health checks.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// Type alias for the database connection pool
pub type DatabasePool = SqlitePool;

/// Default pool size for file-backed databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database connection wrapper
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: Arc<DatabasePool>,
}

impl DatabaseConnection {
    /// Create a new database connection from a connection string
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string (e.g., "sqlite:market.db" or "sqlite::memory:")
    ///
    /// # Returns
    /// A new DatabaseConnection or an sqlx error
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Create a new database connection with custom pool size
    ///
    /// In-memory databases exist only as long as a connection to them is
    /// open, so for those the pool is pinned to one connection that never
    /// idles out and `max_connections` is ignored.
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string
    /// * `max_connections` - Maximum number of concurrent connections
    pub async fn with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        // Foreign keys are informational only; sqlx turns the pragma on by default.
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        tracing::debug!(url = %database_url, "Database pool created");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Open a fresh in-memory database with the schema already created
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let conn = Self::new("sqlite::memory:").await?;
        conn.run_migrations().await?;
        Ok(conn)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Create the users, orders and offers tables if they do not exist yet
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
    }

    /// Perform a health check by running a simple query
    ///
    /// # Returns
    /// Success (Ok(())) if database is healthy, error otherwise
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }

    /// Close the connection pool gracefully
    ///
    /// For an in-memory database this discards all data.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Whether a connection string names a memory-resident database
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
