//! # Email Capture
//!
//! A single-page email capture service built with Axum and a Redis-compatible
//! key-value store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Email validation, outcomes, and the store port
//! - **Application Layer** ([`application`]) - The subscription write path
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory list stores
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - The server-rendered capture page
//!
//! ## Write Path
//!
//! A subscribe call validates the candidate, reads the subscriber list, and
//! appends the email if it is not already present. Every call resolves to an
//! [`domain::entities::Outcome`]; nothing is raised past the service.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store credentials (omit to run in degraded mode)
//! export KV_URL="rediss://eu1-example.upstash.io:6379"
//! export KV_TOKEN="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SubscriptionService;
    pub use crate::domain::entities::{Outcome, ValidatedEmail, validate};
    pub use crate::domain::repositories::{ListStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::MemoryListStore;
    pub use crate::state::AppState;
}
