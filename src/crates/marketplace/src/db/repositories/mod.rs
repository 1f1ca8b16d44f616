//! Repository pattern implementations for database access
//!
//! One repository per table. Every write is a single auto-committed
//! statement, so a failed write leaves the table untouched.

pub mod offer_repo;
pub mod order_repo;
pub mod user_repo;

// Re-export all repositories for convenient access
pub use offer_repo::OfferRepository;
pub use order_repo::OrderRepository;
pub use user_repo::UserRepository;
