//! Seed data loading
//!
//! The initial rows come from a fixed JSON document with `users`, `orders`
//! and `offers` arrays, embedded in the binary and optionally replaced by a
//! file. Seed rows carry explicit ids. Seed order dates are `MM/DD/YYYY`
//! text, unlike the `YYYY-MM-DD` wire format, and are converted here.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::db::models::{NewOffer, NewOrder, NewUser};
use crate::db::repositories::{OfferRepository, OrderRepository, UserRepository};
use crate::db::{DatabaseConnection, DatabaseError};

/// Date format used by the seed document
pub const SEED_DATE_FORMAT: &str = "%m/%d/%Y";

const BUILTIN_SEED: &str = include_str!("../seed/data.json");

/// Errors raised while reading or loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed order {order_id}: {field} {value:?} is not a MM/DD/YYYY date")]
    InvalidDate {
        order_id: i64,
        field: &'static str,
        value: String,
    },

    #[error("Failed to store seed data: {0}")]
    Database(#[from] DatabaseError),
}

/// Seed user row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedUser {
    pub id: i64,
    #[serde(flatten)]
    pub fields: NewUser,
}

/// Seed order row, dates still in seed text form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedOrder {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl SeedOrder {
    /// Convert the seed dates into calendar dates
    pub fn to_new_order(&self) -> Result<NewOrder, SeedError> {
        Ok(NewOrder {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.parse_date("start_date", &self.start_date)?,
            end_date: self.parse_date("end_date", &self.end_date)?,
            address: self.address.clone(),
            price: self.price,
            customer_id: self.customer_id,
            executor_id: self.executor_id,
        })
    }

    fn parse_date(&self, field: &'static str, value: &str) -> Result<NaiveDate, SeedError> {
        NaiveDate::parse_from_str(value, SEED_DATE_FORMAT).map_err(|_| SeedError::InvalidDate {
            order_id: self.id,
            field,
            value: value.to_string(),
        })
    }
}

/// Seed offer row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeedOffer {
    pub id: i64,
    #[serde(flatten)]
    pub fields: NewOffer,
}

/// The full seed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub orders: Vec<SeedOrder>,
    pub offers: Vec<SeedOffer>,
}

/// Number of rows inserted per table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

impl SeedData {
    /// The seed document shipped with the binary
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_str(BUILTIN_SEED)
    }

    /// Parse a seed document
    pub fn from_str(content: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a seed document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Read `path` when given, otherwise use the built-in document
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }
}

/// Insert every seed row: users, then orders, then offers
///
/// Seeding happens once per store: when any of the three tables already
/// holds rows (a file database on its second start) nothing is written and
/// `None` is returned. All order dates are converted before the first insert
/// and every insert runs in one transaction, so a malformed date or a
/// duplicate id leaves the store untouched.
pub async fn load_seed_data(
    db: &DatabaseConnection,
    data: &SeedData,
) -> Result<Option<SeedSummary>, SeedError> {
    let orders = data
        .orders
        .iter()
        .map(|order| order.to_new_order().map(|new_order| (order.id, new_order)))
        .collect::<Result<Vec<_>, _>>()?;

    let pool = db.pool();
    let existing = UserRepository::count(pool).await?
        + OrderRepository::count(pool).await?
        + OfferRepository::count(pool).await?;
    if existing > 0 {
        info!(rows = existing, "Store already populated, skipping seed data");
        return Ok(None);
    }

    let mut tx = pool.begin().await.map_err(DatabaseError::from)?;
    for user in &data.users {
        UserRepository::create(&mut *tx, Some(user.id), &user.fields).await?;
    }
    for (id, order) in &orders {
        OrderRepository::create(&mut *tx, Some(*id), order).await?;
    }
    for offer in &data.offers {
        OfferRepository::create(&mut *tx, Some(offer.id), &offer.fields).await?;
    }
    tx.commit().await.map_err(DatabaseError::from)?;

    let summary = SeedSummary {
        users: data.users.len(),
        orders: orders.len(),
        offers: data.offers.len(),
    };
    info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "Seed data loaded"
    );
    Ok(Some(summary))
}
