//! Capture page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, extract::rejection::FormRejection, response::IntoResponse};
use serde::Deserialize;

use crate::application::services::DegradedReason;
use crate::domain::entities::{EMAIL_SHAPE_PATTERN, Outcome};
use crate::error::AppError;
use crate::state::AppState;

/// Form fields posted by the capture page.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Template for the capture page.
///
/// Renders `templates/index.html` with:
/// - The email form, prefilled with `email`
/// - The last outcome message, if any
/// - `subscribed_email` for the page script to remember on success
/// - `email_pattern`, the same shape rule the server applies
/// - `setup_notice` when the service runs without a store
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    email: String,
    notice: Option<Notice>,
    subscribed_email: Option<String>,
    email_pattern: &'static str,
    setup_notice: Option<&'static str>,
}

impl IndexTemplate {
    fn new(state: &AppState, email: String) -> Self {
        Self {
            email,
            notice: None,
            subscribed_email: None,
            email_pattern: EMAIL_SHAPE_PATTERN,
            setup_notice: state
                .subscription_service
                .degraded_reason()
                .map(setup_notice),
        }
    }
}

/// Visitor-facing banner for a service running without a store.
fn setup_notice(reason: DegradedReason) -> &'static str {
    match reason {
        DegradedReason::NotConfigured => "Subscriptions are not set up on this deployment yet.",
        DegradedReason::Unreachable => {
            "Subscriptions are temporarily unavailable. Please try again later."
        }
    }
}

/// Outcome message shown above the form.
struct Notice {
    success: bool,
    message: String,
    id: String,
}

impl From<&Outcome> for Notice {
    fn from(outcome: &Outcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message().to_string(),
            id: outcome.id().to_string(),
        }
    }
}

/// Renders the empty capture page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate::new(&state, String::new())
}

/// Handles a form submission and re-renders the page with the outcome.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`, field `email`)
///
/// On success the input is cleared and the submitted address is handed to the
/// page script; on failure the submitted text stays in the input.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a form submission.
pub async fn subscribe_form_handler(
    State(state): State<AppState>,
    form: Result<Form<SubscribeForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form?;

    let outcome = state.subscription_service.subscribe(&form.email).await;

    let (email, subscribed_email) = if outcome.is_success() {
        (String::new(), Some(form.email))
    } else {
        (form.email, None)
    };

    Ok(IndexTemplate {
        notice: Some(Notice::from(&outcome)),
        subscribed_email,
        ..IndexTemplate::new(&state, email)
    })
}
