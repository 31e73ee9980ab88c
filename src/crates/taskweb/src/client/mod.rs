//! HTTP client for the Task Store Service
//!
//! Translates frontend intent into the store's JSON contract. One client
//! instance lives for the whole process; every call is bounded by the
//! configured request timeout.

pub mod client;
pub mod messages;

pub use client::TaskStoreClient;
pub use messages::{NewTask, Task, TaskUpdate};
