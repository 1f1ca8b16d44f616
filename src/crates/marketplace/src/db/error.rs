//! Database error type
//!
//! Lookups report absence as `Option`/`bool`, so every variant here is a
//! real failure of the store. The only one callers branch on is
//! `ConstraintViolation`, which surfaces a duplicate primary key.

use thiserror::Error;

/// Failure of a statement against the store
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A write broke a table constraint (duplicate id, CHECK, enforced FK)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The pool is closed or exhausted, or the database file is unreachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A stored row did not decode into its model
    #[error("Row decode failed: {0}")]
    Decode(String),

    /// The engine rejected the statement
    #[error("Statement failed: {0}")]
    Statement(String),

    #[error("Database error: {0}")]
    Other(String),
}

impl DatabaseError {
    /// Check if this is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DatabaseError::ConstraintViolation(_))
    }
}

/// Result type for database operations
pub type DbResult<T> = std::result::Result<T, DatabaseError>;

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                DatabaseError::ConstraintViolation(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) => DatabaseError::Statement(db_err.message().to_string()),
            err @ (sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Configuration(_)) => DatabaseError::Unavailable(err.to_string()),
            err @ (sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)) => DatabaseError::Decode(err.to_string()),
            err => DatabaseError::Other(err.to_string()),
        }
    }
}
