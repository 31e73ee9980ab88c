//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{get, put},
    Router,
};

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
        // Health check endpoints
        .route("/health", get(handlers::health))
        .route("/health/db", get(handlers::health_detailed))
        // Task endpoints
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}
