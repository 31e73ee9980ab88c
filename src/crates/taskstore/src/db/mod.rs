//! Database module for the task store
//!
//! Provides database connectivity, models, repositories, and error handling
//! for the persisted `tasks` table.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};
