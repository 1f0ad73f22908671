#![allow(dead_code)]

use async_trait::async_trait;
use email_capture::application::services::{DEFAULT_LIST_KEY, DegradedReason, SubscriptionService};
use email_capture::domain::repositories::{ListStore, StoreError, StoreResult};
use email_capture::infrastructure::store::MemoryListStore;
use email_capture::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store double that fails every call and counts how often it was touched.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<Vec<String>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _list: &[String]) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Operation("read only".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn memory_store(initial: &[&str]) -> Arc<MemoryListStore> {
    if initial.is_empty() {
        Arc::new(MemoryListStore::new())
    } else {
        Arc::new(MemoryListStore::with_list(
            DEFAULT_LIST_KEY,
            initial.iter().map(|e| e.to_string()).collect(),
        ))
    }
}

pub fn create_test_state(store: Arc<MemoryListStore>) -> AppState {
    AppState::new(SubscriptionService::new(store, DEFAULT_LIST_KEY))
}

pub fn create_failing_state() -> (AppState, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    let state = AppState::new(SubscriptionService::new(store.clone(), DEFAULT_LIST_KEY));
    (state, store)
}

pub fn create_degraded_state() -> AppState {
    AppState::new(SubscriptionService::degraded(DegradedReason::NotConfigured))
}

pub fn create_unreachable_state() -> AppState {
    AppState::new(SubscriptionService::degraded(DegradedReason::Unreachable))
}
