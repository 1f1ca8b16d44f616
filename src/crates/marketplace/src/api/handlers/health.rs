//! Health check endpoint handler

use axum::{extract::State, http::StatusCode, Json};

use crate::api::{models::HealthResponse, routes::AppState};

/// Handler for GET /health
///
/// Reports whether the store answers a trivial query.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match app_state.db.health_check().await {
        Ok(()) => {
            let health = HealthResponse::new("ok", "connected");
            (StatusCode::OK, Json(health))
        }
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            let health = HealthResponse::new("error", "error");
            (StatusCode::SERVICE_UNAVAILABLE, Json(health))
        }
    }
}
