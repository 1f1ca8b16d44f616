//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{routing::get, Router};

use crate::api::{handlers, middleware};
use crate::db::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Build the complete API router
pub fn create_router(db: DatabaseConnection) -> Router {
    let app_state = AppState { db };

    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health))
        // User endpoints
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Order endpoints
        .route(
            "/orders",
            get(handlers::list_orders)
                .post(handlers::create_order),
        )
        .route(
            "/orders/:id",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        // Offer endpoints
        .route(
            "/offers",
            get(handlers::list_offers)
                .post(handlers::create_offer),
        )
        .route(
            "/offers/:id",
            get(handlers::get_offer)
                .put(handlers::update_offer)
                .delete(handlers::delete_offer),
        )
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}
