//! Route definitions for the browser-facing surface

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::client::TaskStoreClient;
use crate::handlers;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: TaskStoreClient,
}

/// Build the frontend router
///
/// Mutation paths accept POST; a stray GET on them redirects to the
/// index instead of erroring.
pub fn create_router(client: TaskStoreClient) -> Router {
    let app_state = AppState { client };

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route(
            "/add",
            get(handlers::redirect_home).post(handlers::add_task),
        )
        .route("/create", get(handlers::redirect_home).post(handlers::add_task))
        .route(
            "/update",
            get(handlers::redirect_home).post(handlers::update_task),
        )
        .route(
            "/delete",
            get(handlers::redirect_home).post(handlers::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
