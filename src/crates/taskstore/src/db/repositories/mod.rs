//! Repository pattern implementations for database access
//!
//! Each repository method issues exactly one SQL statement against the
//! shared pool; no transactions span multiple statements.

pub mod task_repo;

pub use task_repo::TaskRepository;
