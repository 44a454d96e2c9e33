//! Handler for contact form submissions.
//!
//! Validation errors short-circuit before any storage access. A storage
//! failure becomes a generic 500 whose cause is only echoed back in
//! development deployments.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use folio_core::contact::SUBMITTED_MESSAGE;
use folio_db::models::contact::ContactForm;

use crate::error::{AppError, AppResult};
use crate::response::CreatedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

/// Validate and store one contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let input = form.validate()?;

    let contact = state
        .contacts
        .create_contact(&input)
        .await
        .map_err(|source| AppError::SubmissionFailed {
            source,
            expose_details: state.config.app_env.is_development(),
        })?;

    tracing::info!(contact_id = contact.id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(SUBMITTED_MESSAGE, contact)),
    ))
}
