//! Database models
//!
//! Core data models for the persisted `tasks` table. The integer form of
//! the `completed` flag stays inside this module; everything above it
//! works with booleans.

pub mod task;

pub use task::{Task, TaskDraft, TaskRow};
