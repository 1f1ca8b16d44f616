//! Database models
//!
//! Row models for the users, orders and offers tables. Calendar dates are
//! stored as `YYYY-MM-DD` text and decoded into `chrono::NaiveDate`.

pub mod offer;
pub mod order;
pub mod user;

pub use offer::{NewOffer, Offer};
pub use order::{NewOrder, Order};
pub use user::{NewUser, User};
