//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::SubscriptionService;

#[derive(Clone)]
pub struct AppState {
    pub subscription_service: Arc<SubscriptionService>,
}

impl AppState {
    pub fn new(subscription_service: SubscriptionService) -> Self {
        Self {
            subscription_service: Arc::new(subscription_service),
        }
    }
}
