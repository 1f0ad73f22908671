//! Subscriber list storage.
//!
//! Provides two [`crate::domain::repositories::ListStore`] implementations:
//! - [`RedisListStore`] - Remote Redis-compatible key-value store
//! - [`MemoryListStore`] - In-process store for tests and local runs

mod memory_store;
mod redis_store;

pub use memory_store::MemoryListStore;
pub use redis_store::RedisListStore;
