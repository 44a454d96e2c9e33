use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::contact::{ContactValidationError, SUBMISSION_FAILED_MESSAGE};
use folio_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storing a contact submission failed.
    ///
    /// `expose_details` is decided by the handler from the deployment
    /// environment; the cause is always logged.
    #[error("Failed to submit contact form: {source}")]
    SubmissionFailed {
        source: sqlx::Error,
        expose_details: bool,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ContactValidationError> for AppError {
    fn from(err: ContactValidationError) -> Self {
        AppError::Core(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::SubmissionFailed {
                source,
                expose_details,
            } => {
                tracing::error!(error = %source, "Failed to store contact submission");
                let mut body = json!({
                    "error": SUBMISSION_FAILED_MESSAGE,
                    "code": "SUBMISSION_FAILED",
                });
                if *expose_details {
                    body["details"] = json!(source.to_string());
                }
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
