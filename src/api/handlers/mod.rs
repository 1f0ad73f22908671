//! HTTP request handlers for API endpoints.

pub mod health;
pub mod subscribe;

pub use health::health_handler;
pub use subscribe::{subscribe_handler, validate_handler};
