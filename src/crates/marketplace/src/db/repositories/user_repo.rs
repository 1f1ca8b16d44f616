//! User repository for database operations

use sqlx::SqliteExecutor;

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::{NewUser, User};

/// User repository for managing user database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a user, letting SQLite pick the id when none is given
    ///
    /// Runs on the pool or inside a transaction.
    pub async fn create<'e, E>(executor: E, id: Option<i64>, user: &NewUser) -> DbResult<User>
    where
        E: SqliteExecutor<'e>,
    {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, first_name, last_name, age, email, role, phone)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.age)
        .bind(&user.email)
        .bind(&user.role)
        .bind(&user.phone)
        .fetch_one(executor)
        .await?;
        Ok(created)
    }

    /// Get a user by ID
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// List all users
    pub async fn list(pool: &DatabasePool) -> DbResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }

    /// Overwrite every column of a user
    ///
    /// Returns `None` when no user has this id.
    pub async fn update(pool: &DatabasePool, id: i64, user: &NewUser) -> DbResult<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users
             SET first_name = ?, last_name = ?, age = ?, email = ?, role = ?, phone = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.age)
        .bind(&user.email)
        .bind(&user.role)
        .bind(&user.phone)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Delete a user, returning whether a row was removed
    pub async fn delete(pool: &DatabasePool, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total users
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(result.0)
    }
}
