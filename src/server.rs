//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring and the Axum server lifecycle.

use crate::application::services::{DegradedReason, SubscriptionService};
use crate::config::{Config, StoreConfig};
use crate::infrastructure::store::RedisListStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the subscription service for the resolved store configuration.
///
/// A missing configuration, or a store that cannot be reached at startup,
/// yields a degraded service instead of an error.
pub async fn build_subscription_service(config: &Config) -> SubscriptionService {
    match &config.store {
        StoreConfig::Configured { url, token } => {
            match RedisListStore::connect(url, token, config.store_timeout()).await {
                Ok(store) => {
                    tracing::info!("Store enabled (key: {})", config.store_key);
                    SubscriptionService::new(Arc::new(store), config.store_key.clone())
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to store: {}. Running degraded.", e);
                    SubscriptionService::degraded(DegradedReason::Unreachable)
                }
            }
        }
        StoreConfig::Missing => {
            tracing::warn!("Store credentials missing. Running degraded.");
            SubscriptionService::degraded(DegradedReason::NotConfigured)
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = build_subscription_service(&config).await;
    let state = AppState::new(service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
