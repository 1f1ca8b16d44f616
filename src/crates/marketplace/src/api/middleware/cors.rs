//! CORS middleware configuration

use tower_http::cors::CorsLayer;

/// Create CORS layer allowing any origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
