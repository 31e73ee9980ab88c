//! API request handlers
//!
//! Handler functions for all API endpoints organized by resource.

pub mod health;
pub mod tasks;

pub use health::{health, health_detailed};
pub use tasks::{create_task, delete_task, list_tasks, update_task};
