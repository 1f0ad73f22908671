//! Subscription write path.

use std::sync::Arc;

use crate::domain::entities::outcome::{ALREADY_SUBSCRIBED, MISSING_SETUP, SUBSCRIBED};
use crate::domain::entities::{Outcome, ValidatedEmail, validate};
use crate::domain::repositories::{ListStore, StoreResult};
use crate::utils::mask::mask_email;
use tracing::{debug, error, info, warn};

/// Default key the subscriber list is stored under.
pub const DEFAULT_LIST_KEY: &str = "emails";

/// What happened to a validated email inside the store round-trip.
enum Appended {
    New,
    Duplicate,
}

/// Why a service is running without a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// `KV_URL` or `KV_TOKEN` was absent or blank.
    NotConfigured,
    /// Credentials were present but the store did not answer at startup.
    Unreachable,
}

impl DegradedReason {
    /// Operator-facing description for logs and health checks.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NotConfigured => "Store not configured",
            Self::Unreachable => "Store unreachable at startup",
        }
    }
}

enum Backend {
    Store(Arc<dyn ListStore>),
    Degraded(DegradedReason),
}

/// Service that validates candidates and appends them to the subscriber list.
///
/// Built either with a store ([`Self::new`]) or without one
/// ([`Self::degraded`]). In degraded mode every call fails fast with
/// `"Missing required setup"` and the store is never touched.
///
/// # Concurrency
///
/// Each call performs one read and at most one write against the list key with
/// no locking or versioning in between. Two concurrent calls adding different
/// new emails may both read the same list, in which case the later write wins
/// and the earlier append is lost.
pub struct SubscriptionService {
    backend: Backend,
    list_key: String,
}

impl SubscriptionService {
    /// Creates a service backed by `store`, writing under `list_key`.
    pub fn new(store: Arc<dyn ListStore>, list_key: impl Into<String>) -> Self {
        Self {
            backend: Backend::Store(store),
            list_key: list_key.into(),
        }
    }

    /// Creates a service with no store.
    pub fn degraded(reason: DegradedReason) -> Self {
        Self {
            backend: Backend::Degraded(reason),
            list_key: DEFAULT_LIST_KEY.to_string(),
        }
    }

    /// Returns true when the service runs without a store.
    pub fn is_degraded(&self) -> bool {
        self.degraded_reason().is_some()
    }

    /// Why the service runs without a store, if it does.
    pub fn degraded_reason(&self) -> Option<DegradedReason> {
        match &self.backend {
            Backend::Store(_) => None,
            Backend::Degraded(reason) => Some(*reason),
        }
    }

    /// Key the subscriber list is stored under.
    pub fn list_key(&self) -> &str {
        &self.list_key
    }

    fn store(&self) -> Option<&Arc<dyn ListStore>> {
        match &self.backend {
            Backend::Store(store) => Some(store),
            Backend::Degraded(_) => None,
        }
    }

    /// Validates `candidate` and adds it to the subscriber list if new.
    ///
    /// # Flow
    ///
    /// 1. No store configured: `Failure("Missing required setup")`, no I/O
    /// 2. Validation fails: `Failure(reason)`, no I/O
    /// 3. Read the list (absent key reads as empty)
    /// 4. Already present (exact match): `Success("Email is already subscribed")`, no write
    /// 5. Otherwise write the list with the email appended:
    ///    `Success("Thank you for subscribing!")`
    ///
    /// Store errors in steps 3-5 become `Failure` carrying the error's
    /// description. This method never returns an error and never panics on
    /// store failures.
    pub async fn subscribe(&self, candidate: &str) -> Outcome {
        let Some(store) = self.store() else {
            warn!("Subscribe rejected: running degraded");
            return Outcome::failure(MISSING_SETUP);
        };

        let email = match validate(candidate) {
            Ok(email) => email,
            Err(rejection) => {
                warn!(
                    "Subscribe rejected for {}: {}",
                    mask_email(candidate),
                    rejection
                );
                return Outcome::failure(rejection.reason());
            }
        };

        match self.append_if_absent(store.as_ref(), &email).await {
            Ok(Appended::New) => {
                info!("New subscriber {}", mask_email(email.as_str()));
                Outcome::success(SUBSCRIBED)
            }
            Ok(Appended::Duplicate) => {
                debug!("Already subscribed: {}", mask_email(email.as_str()));
                Outcome::success(ALREADY_SUBSCRIBED)
            }
            Err(e) => {
                error!("Subscribe failed for {}: {}", mask_email(email.as_str()), e);
                Outcome::failure_from(e.to_string())
            }
        }
    }

    /// Reads every stored subscriber in insertion order.
    ///
    /// Returns an empty list when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::repositories::StoreError`] on store failures.
    /// Returns `Ok(None)` in degraded mode.
    pub async fn list_subscribers(&self) -> StoreResult<Option<Vec<String>>> {
        let Some(store) = self.store() else {
            return Ok(None);
        };

        Ok(Some(store.get(&self.list_key).await?.unwrap_or_default()))
    }

    /// Checks if the configured store answers. Always false in degraded mode.
    pub async fn store_healthy(&self) -> bool {
        match self.store() {
            Some(store) => store.health_check().await,
            None => false,
        }
    }

    /// Read-modify-write of the list key.
    async fn append_if_absent(
        &self,
        store: &dyn ListStore,
        email: &ValidatedEmail,
    ) -> StoreResult<Appended> {
        let mut list = store.get(&self.list_key).await?.unwrap_or_default();

        if list.iter().any(|existing| existing == email.as_str()) {
            return Ok(Appended::Duplicate);
        }

        list.push(email.as_str().to_string());
        store.set(&self.list_key, &list).await?;

        Ok(Appended::New)
    }
}
