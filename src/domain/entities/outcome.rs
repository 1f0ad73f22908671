//! Outcome of a subscribe call.

use crate::utils::correlation_id::generate_id;
use serde::Serialize;

/// Message for a newly stored address.
pub const SUBSCRIBED: &str = "Thank you for subscribing!";

/// Message for an address that was already on the list.
pub const ALREADY_SUBSCRIBED: &str = "Email is already subscribed";

/// Message used when the store is not configured.
pub const MISSING_SETUP: &str = "Missing required setup";

/// Fallback when a store failure carries no description.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Result of [`crate::application::services::SubscriptionService::subscribe`].
///
/// This is the only value that crosses from the write path into the
/// presentation layer. Each value carries a fresh `id` so the UI can tell two
/// identical messages apart; the id plays no part in deduplication.
///
/// Serialized as `{"status": "success" | "error", "message": ..., "id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        message: String,
        id: String,
    },
    #[serde(rename = "error")]
    Failure {
        message: String,
        id: String,
    },
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
            id: generate_id(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            id: generate_id(),
        }
    }

    /// Builds a failure from an error description, falling back to
    /// [`GENERIC_FAILURE`] when the description is blank.
    pub fn failure_from(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::failure(GENERIC_FAILURE)
        } else {
            Self::failure(description)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Success { id, .. } | Self::Failure { id, .. } => id,
        }
    }
}
