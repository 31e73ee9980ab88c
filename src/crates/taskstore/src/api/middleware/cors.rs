//! CORS middleware configuration

use tower_http::cors::CorsLayer;

/// Create CORS layer; permissive, the gateway enforces origin policy
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
