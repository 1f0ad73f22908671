//! Application layer services implementing business logic.
//!
//! Services consume the store port from [`crate::domain::repositories`] and
//! provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::subscription_service::SubscriptionService`] - Validation and
//!   subscriber list appends

pub mod services;
