//! Order repository for database operations

use sqlx::SqliteExecutor;

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::{NewOrder, Order};

/// Order repository for managing order database operations
pub struct OrderRepository;

impl OrderRepository {
    /// Insert an order, letting SQLite pick the id when none is given
    ///
    /// Runs on the pool or inside a transaction.
    pub async fn create<'e, E>(executor: E, id: Option<i64>, order: &NewOrder) -> DbResult<Order>
    where
        E: SqliteExecutor<'e>,
    {
        let created = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, name, description, start_date, end_date, address, price, customer_id, executor_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(id)
        .bind(&order.name)
        .bind(&order.description)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(&order.address)
        .bind(order.price)
        .bind(order.customer_id)
        .bind(order.executor_id)
        .fetch_one(executor)
        .await?;
        Ok(created)
    }

    /// Get an order by ID
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(order)
    }

    /// List all orders
    pub async fn list(pool: &DatabasePool) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(orders)
    }

    /// Overwrite every column of an order
    ///
    /// Returns `None` when no order has this id.
    pub async fn update(pool: &DatabasePool, id: i64, order: &NewOrder) -> DbResult<Option<Order>> {
        let updated = sqlx::query_as::<_, Order>(
            "UPDATE orders
             SET name = ?, description = ?, start_date = ?, end_date = ?, address = ?,
                 price = ?, customer_id = ?, executor_id = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&order.name)
        .bind(&order.description)
        .bind(order.start_date)
        .bind(order.end_date)
        .bind(&order.address)
        .bind(order.price)
        .bind(order.customer_id)
        .bind(order.executor_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Delete an order, returning whether a row was removed
    pub async fn delete(pool: &DatabasePool, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total orders
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await?;
        Ok(result.0)
    }
}
