//! API route configuration.

use crate::api::handlers::{subscribe_handler, validate_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /subscribe` - Validate and store an email, returns an outcome
/// - `POST /validate`  - Validate an email without touching the store
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe_handler))
        .route("/validate", post(validate_handler))
}
