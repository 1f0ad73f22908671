//! Infrastructure layer for external integrations.
//!
//! This layer implements the store port defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory list stores

pub mod store;
