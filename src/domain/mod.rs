//! Domain layer containing the subscription entities and store port.
//!
//! # Architecture
//!
//! - [`entities`] - Validated emails, the validator and subscribe outcomes
//! - [`repositories`] - Store trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store traits define contracts implemented by the infrastructure layer
//! - The write path itself lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
