//! API middleware layer
//!
//! Request logging and CORS. The gateway in front of this service owns
//! real transport policy; CORS here stays permissive.

pub mod cors;
pub mod logging;

pub use cors::cors_layer;
pub use logging::logging_layer;
