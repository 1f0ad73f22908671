//! Store port for the subscriber list.

use async_trait::async_trait;

/// Errors raised by a [`ListStore`] implementation.
///
/// The `Display` text of each variant is what ends up in a
/// [`crate::domain::entities::Outcome::Failure`] message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Stored subscriber list is corrupt: {0}")]
    Corrupt(String),

    #[error("Store operation timed out")]
    Timeout,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding ordered string lists.
///
/// The write path only ever touches one well-known key. There is no
/// compare-and-swap: a `get` followed by a `set` is not atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisListStore`] - Remote Redis-compatible store
/// - [`crate::infrastructure::store::MemoryListStore`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Reads the list stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(list))` if the key exists
    /// - `Ok(None)` if the key has never been written
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on network failures or if the stored value is not
    /// a list of strings.
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<String>>>;

    /// Replaces the list stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on network or store failures.
    async fn set(&self, key: &str, list: &[String]) -> StoreResult<()>;

    /// Checks if the store answers.
    async fn health_check(&self) -> bool;
}
