//! Store trait definitions for the domain layer.
//!
//! The traits here are the ports the application layer depends on. Concrete
//! implementations live in `crate::infrastructure::store`, and mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Ports
//!
//! - [`ListStore`] - Ordered string lists under well-known keys

pub mod list_store;

pub use list_store::{ListStore, StoreError, StoreResult};

#[cfg(test)]
pub use list_store::MockListStore;
