//! Capture page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, subscribe_form_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`  - Capture page
/// - `POST /` - Form submission, re-renders the page with the outcome
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler).post(subscribe_form_handler))
}
