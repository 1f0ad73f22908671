//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Store Credentials
//!
//! ```bash
//! export KV_URL="rediss://eu1-example.upstash.io:6379"
//! export KV_TOKEN="AXXXASQgYjM..."
//! ```
//!
//! Both values must be present and non-empty for subscriptions to be stored.
//! If either is missing the service still starts, in degraded mode: the page
//! renders and every subscribe call reports `"Missing required setup"`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STORE_KEY` - Key holding the subscriber list (default: `emails`)
//! - `STORE_TIMEOUT_MS` - Per-command store timeout (default: 5000)

use crate::application::services::DEFAULT_LIST_KEY;
use crate::utils::mask::mask_connection_string;
use anyhow::Result;
use std::env;
use std::time::Duration;

/// Store connection settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Configured { url: String, token: String },
    Missing,
}

impl StoreConfig {
    /// Resolves the store settings from an endpoint and a credential.
    ///
    /// Absent or blank values yield [`StoreConfig::Missing`].
    pub fn resolve(url: Option<String>, token: Option<String>) -> Self {
        let url = url.filter(|v| !v.trim().is_empty());
        let token = token.filter(|v| !v.trim().is_empty());

        match (url, token) {
            (Some(url), Some(token)) => Self::Configured { url, token },
            _ => Self::Missing,
        }
    }

    /// Returns whether both store values are present.
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub store: StoreConfig,
    /// Key the subscriber list is stored under.
    pub store_key: String,
    /// Upper bound for connecting to the store and for each store command.
    pub store_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing store credentials are not an error.
    pub fn from_env() -> Self {
        let store = StoreConfig::resolve(env::var("KV_URL").ok(), env::var("KV_TOKEN").ok());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let store_key = env::var("STORE_KEY").unwrap_or_else(|_| DEFAULT_LIST_KEY.to_string());

        let store_timeout_ms = env::var("STORE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Self {
            listen_addr,
            log_level,
            log_format,
            store,
            store_key,
            store_timeout_ms,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - the store URL is not a `redis://` or `rediss://` URL
    /// - `store_key` is empty
    /// - `store_timeout_ms` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let StoreConfig::Configured { url, .. } = &self.store
            && !url.starts_with("redis://")
            && !url.starts_with("rediss://")
        {
            anyhow::bail!(
                "KV_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(url)
            );
        }

        if self.store_key.trim().is_empty() {
            anyhow::bail!("STORE_KEY must not be empty");
        }

        if self.store_timeout_ms == 0 {
            anyhow::bail!("STORE_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Store timeout as a [`Duration`].
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.store {
            StoreConfig::Configured { url, .. } => {
                tracing::info!("  Store: {} (token: ***)", mask_connection_string(url));
                tracing::info!("  Store key: {}", self.store_key);
                tracing::info!("  Store timeout: {}ms", self.store_timeout_ms);
            }
            StoreConfig::Missing => {
                tracing::warn!("  Store: not configured (degraded mode)");
            }
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            store: StoreConfig::Configured {
                url: "rediss://localhost:6379".to_string(),
                token: "secret".to_string(),
            },
            store_key: "emails".to_string(),
            store_timeout_ms: 5000,
        }
    }

    #[test]
    fn test_store_config_resolve() {
        assert_eq!(
            StoreConfig::resolve(
                Some("redis://localhost:6379".to_string()),
                Some("token".to_string())
            ),
            StoreConfig::Configured {
                url: "redis://localhost:6379".to_string(),
                token: "token".to_string(),
            }
        );

        assert_eq!(
            StoreConfig::resolve(Some("redis://localhost:6379".to_string()), None),
            StoreConfig::Missing
        );
        assert_eq!(
            StoreConfig::resolve(None, Some("token".to_string())),
            StoreConfig::Missing
        );
        assert_eq!(
            StoreConfig::resolve(Some("redis://localhost:6379".to_string()), Some("  ".to_string())),
            StoreConfig::Missing
        );
        assert!(!StoreConfig::resolve(None, None).is_configured());
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.store = StoreConfig::Configured {
            url: "https://localhost".to_string(),
            token: "secret".to_string(),
        };
        assert!(config.validate().is_err());

        config.store = StoreConfig::Missing;
        assert!(config.validate().is_ok());

        config.store_key = " ".to_string();
        assert!(config.validate().is_err());

        config.store_key = "emails".to_string();
        config.store_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_timeout() {
        assert_eq!(test_config().store_timeout(), Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_without_store_is_degraded() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("KV_URL");
            env::set_var("KV_TOKEN", "secret");
        }

        let config = Config::from_env();
        assert_eq!(config.store, StoreConfig::Missing);
        assert!(config.validate().is_ok());

        unsafe {
            env::remove_var("KV_TOKEN");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_with_store() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("KV_URL", "redis://localhost:6379");
            env::set_var("KV_TOKEN", "secret");
            env::set_var("STORE_KEY", "launch");
            env::set_var("STORE_TIMEOUT_MS", "250");
        }

        let config = Config::from_env();
        assert!(config.store.is_configured());
        assert_eq!(config.store_key, "launch");
        assert_eq!(config.store_timeout_ms, 250);

        // Cleanup
        unsafe {
            env::remove_var("KV_URL");
            env::remove_var("KV_TOKEN");
            env::remove_var("STORE_KEY");
            env::remove_var("STORE_TIMEOUT_MS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("STORE_KEY");
            env::set_var("STORE_TIMEOUT_MS", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.store_key, "emails");
        assert_eq!(config.store_timeout_ms, 5000);

        unsafe {
            env::remove_var("STORE_TIMEOUT_MS");
        }
    }
}
