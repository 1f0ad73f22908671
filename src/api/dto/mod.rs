//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Subscribe
//! responses reuse [`crate::domain::entities::Outcome`] directly.

pub mod health;
pub mod subscribe;
