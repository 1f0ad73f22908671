//! Handlers for the subscribe and validate endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::subscribe::{SubscribeRequest, ValidateResponse};
use crate::domain::entities::{Outcome, validate};
use crate::error::AppError;
use crate::state::AppState;

/// Subscribes a candidate email.
///
/// # Endpoint
///
/// `POST /api/subscribe`
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com" }
/// ```
///
/// # Response
///
/// Always `200 OK` once the body parses. The outcome carries the tag:
///
/// ```json
/// { "status": "success", "message": "Thank you for subscribing!", "id": "q2Vx0d9LkR3a" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON.
pub async fn subscribe_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<Outcome>, AppError> {
    let Json(payload) = payload?;

    let outcome = state.subscription_service.subscribe(&payload.email).await;

    Ok(Json(outcome))
}

/// Checks a candidate email without touching the store.
///
/// # Endpoint
///
/// `POST /api/validate`
///
/// # Response
///
/// ```json
/// { "valid": true, "email": "a@x.com" }
/// { "valid": false, "reason": "Invalid email." }
/// ```
pub async fn validate_handler(
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(payload) = payload?;

    let response = match validate(&payload.email) {
        Ok(email) => ValidateResponse::Valid {
            valid: true,
            email: email.into_inner(),
        },
        Err(rejection) => ValidateResponse::Invalid {
            valid: false,
            reason: rejection.reason().to_string(),
        },
    };

    Ok(Json(response))
}
