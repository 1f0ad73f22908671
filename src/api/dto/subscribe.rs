//! DTOs for the subscribe and validate endpoints.

use serde::{Deserialize, Serialize};

/// Request carrying a candidate email.
///
/// A missing `email` field is treated as an empty candidate so it reaches the
/// validator and yields `"Email is required."`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// Result of a standalone validation check.
///
/// Uses an untagged enum so the JSON carries either `email` or `reason`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidateResponse {
    Valid { valid: bool, email: String },
    Invalid { valid: bool, reason: String },
}
