//! REST API layer for the task store
//!
//! Exposes the CRUD contract consumed by the web frontend through the
//! gateway:
//! - `GET /tasks` — JSON array of all tasks
//! - `POST /tasks` — insert, 201 with empty body
//! - `PUT /tasks/:id` — rewrite, 200 with empty body
//! - `DELETE /tasks/:id` — remove, 200 with empty body

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
