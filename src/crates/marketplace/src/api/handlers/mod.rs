//! API request handlers
//!
//! Provides handler functions for all API endpoints organized by resource.

pub mod health;
pub mod offers;
pub mod orders;
pub mod users;

pub use health::health;
pub use offers::{create_offer, delete_offer, get_offer, list_offers, update_offer};
pub use orders::{create_order, delete_order, get_order, list_orders, update_order};
pub use users::{create_user, delete_user, get_user, list_users, update_user};
