//! Redis-backed subscriber list store.

use crate::domain::repositories::{ListStore, StoreError, StoreResult};
use crate::utils::mask::mask_connection_string;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// List store over a Redis-compatible endpoint.
///
/// Lists are kept as JSON arrays of strings under plain string keys, which is
/// the layout hosted key-value services use for JSON values. Every command is
/// bounded by the configured timeout.
pub struct RedisListStore {
    client: ConnectionManager,
    timeout: Duration,
}

impl RedisListStore {
    /// Connects to the store, validates the connection with a PING, and
    /// configures the per-command timeout.
    ///
    /// # Arguments
    ///
    /// - `endpoint` - Store URL (e.g., `"rediss://eu1-example.upstash.io:6379"`)
    /// - `token` - Access credential, sent as the connection password
    /// - `timeout` - Upper bound for connecting and for each command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails. Returns [`StoreError::Timeout`]
    /// if connecting takes longer than `timeout`.
    pub async fn connect(endpoint: &str, token: &str, timeout: Duration) -> StoreResult<Self> {
        let url = authenticated_url(endpoint, token)?;
        info!(
            "Connecting to store at {}",
            mask_connection_string(endpoint)
        );

        let client = Client::open(url.as_str()).map_err(|e| {
            StoreError::Connection(format!("Failed to create store client: {}", e))
        })?;

        let manager = with_timeout(timeout, async {
            ConnectionManager::new(client)
                .await
                .map_err(|e| StoreError::Connection(format!("Failed to connect to store: {}", e)))
        })
        .await?;

        let mut test_conn = manager.clone();
        with_timeout(timeout, async {
            test_conn
                .ping::<()>()
                .await
                .map_err(|e| StoreError::Connection(format!("Store PING failed: {}", e)))
        })
        .await?;

        info!("✓ Connected to store");

        Ok(Self {
            client: manager,
            timeout,
        })
    }
}

#[async_trait]
impl ListStore for RedisListStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<String>>> {
        let mut conn = self.client.clone();

        let raw = with_timeout(self.timeout, async {
            conn.get::<_, Option<String>>(key)
                .await
                .map_err(|e| StoreError::Operation(e.to_string()))
        })
        .await?;

        match raw {
            Some(json) => {
                let list = decode_list(&json)?;
                debug!("Store GET {}: {} entries", key, list.len());
                Ok(Some(list))
            }
            None => {
                debug!("Store GET {}: absent", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, list: &[String]) -> StoreResult<()> {
        let mut conn = self.client.clone();
        let json = serde_json::to_string(list).map_err(|e| StoreError::Operation(e.to_string()))?;

        with_timeout(self.timeout, async {
            conn.set::<_, _, ()>(key, json)
                .await
                .map_err(|e| StoreError::Operation(e.to_string()))
        })
        .await?;

        debug!("Store SET {}: {} entries", key, list.len());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        matches!(
            tokio::time::timeout(self.timeout, conn.ping::<()>()).await,
            Ok(Ok(()))
        )
    }
}

/// Runs `operation`, mapping an elapsed deadline to [`StoreError::Timeout`].
async fn with_timeout<T>(
    timeout: Duration,
    operation: impl Future<Output = StoreResult<T>>,
) -> StoreResult<T> {
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| StoreError::Timeout)?
}

/// Injects the access token as the password of the store URL.
fn authenticated_url(endpoint: &str, token: &str) -> StoreResult<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| StoreError::Connection(format!("Invalid store URL: {}", e)))?;

    url.set_password(Some(token))
        .map_err(|_| StoreError::Connection("Store URL cannot carry credentials".to_string()))?;

    Ok(url)
}

/// Decodes a stored JSON array of strings.
fn decode_list(json: &str) -> StoreResult<Vec<String>> {
    serde_json::from_str(json).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_url_sets_password() {
        let url = authenticated_url("rediss://eu1.example.io:6379", "tok3n").unwrap();
        assert_eq!(url.as_str(), "rediss://:tok3n@eu1.example.io:6379");
    }

    #[test]
    fn test_authenticated_url_keeps_username() {
        let url = authenticated_url("redis://default@localhost:6379/0", "secret").unwrap();
        assert_eq!(url.username(), "default");
        assert_eq!(url.password(), Some("secret"));
        assert_eq!(url.path(), "/0");
    }

    #[test]
    fn test_authenticated_url_invalid() {
        let result = authenticated_url("not a url", "secret");
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }

    #[test]
    fn test_decode_list() {
        let list = decode_list(r#"["a@x.com","b@x.com"]"#).unwrap();
        assert_eq!(list, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_decode_list_rejects_non_list() {
        assert!(matches!(decode_list("42"), Err(StoreError::Corrupt(_))));
        assert!(matches!(
            decode_list(r#"{"a":1}"#),
            Err(StoreError::Corrupt(_))
        ));
        assert!(matches!(decode_list("[1, 2]"), Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_with_timeout_elapsed() {
        let result: StoreResult<()> = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(StoreError::Timeout)));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_inner_error() {
        let result: StoreResult<()> = with_timeout(Duration::from_secs(1), async {
            Err(StoreError::Operation("boom".to_string()))
        })
        .await;

        assert!(matches!(result, Err(StoreError::Operation(m)) if m == "boom"));
    }
}
