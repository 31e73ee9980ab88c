//! Task Store Service
//!
//! HTTP CRUD backend over a single `tasks` table. An external gateway
//! routes requests here; the service maps each HTTP verb onto one
//! parameterized SQL statement and returns JSON.

pub mod api;
pub mod config;
pub mod db;

pub use config::StoreConfig;
