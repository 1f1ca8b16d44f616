//! Offer repository for database operations

use sqlx::SqliteExecutor;

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::{NewOffer, Offer};

/// Offer repository for managing offer database operations
pub struct OfferRepository;

impl OfferRepository {
    /// Insert an offer, letting SQLite pick the id when none is given
    ///
    /// Runs on the pool or inside a transaction.
    pub async fn create<'e, E>(executor: E, id: Option<i64>, offer: &NewOffer) -> DbResult<Offer>
    where
        E: SqliteExecutor<'e>,
    {
        let created = sqlx::query_as::<_, Offer>(
            "INSERT INTO offers (id, order_id, executor_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(id)
        .bind(offer.order_id)
        .bind(offer.executor_id)
        .fetch_one(executor)
        .await?;
        Ok(created)
    }

    /// Get an offer by ID
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<Offer>> {
        let offer = sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(offer)
    }

    /// List all offers
    pub async fn list(pool: &DatabasePool) -> DbResult<Vec<Offer>> {
        let offers = sqlx::query_as::<_, Offer>("SELECT * FROM offers ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(offers)
    }

    /// Overwrite both reference columns of an offer
    pub async fn update(pool: &DatabasePool, id: i64, offer: &NewOffer) -> DbResult<Option<Offer>> {
        let updated = sqlx::query_as::<_, Offer>(
            "UPDATE offers SET order_id = ?, executor_id = ? WHERE id = ? RETURNING *",
        )
        .bind(offer.order_id)
        .bind(offer.executor_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Delete an offer, returning whether a row was removed
    pub async fn delete(pool: &DatabasePool, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total offers
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM offers")
            .fetch_one(pool)
            .await?;
        Ok(result.0)
    }
}
