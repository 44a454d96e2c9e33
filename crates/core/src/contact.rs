//! Contact form validation rules.
//!
//! A submission carries three free-text fields. Validation is ordered and the
//! first failure wins: presence of every field is checked before the e-mail
//! format. Values are checked as given; nothing is trimmed or normalized.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// `local@domain.tld`, where no part may contain whitespace or `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Message returned alongside a successfully stored submission.
pub const SUBMITTED_MESSAGE: &str = "Contact form submitted successfully";

/// Generic message returned when a submission could not be stored.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit contact form";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a contact submission was rejected before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns `true` if `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The three contact fields after the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Check that every field is present and non-empty.
pub fn validate_required(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<ContactFields, ContactValidationError> {
    match (name, email, message) {
        (Some(name), Some(email), Some(message))
            if !name.is_empty() && !email.is_empty() && !message.is_empty() =>
        {
            Ok(ContactFields {
                name,
                email,
                message,
            })
        }
        _ => Err(ContactValidationError::MissingFields),
    }
}

/// Check the e-mail address format.
pub fn validate_email(email: &str) -> Result<(), ContactValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ContactValidationError::InvalidEmail)
    }
}

/// Run the full ordered validation policy over a raw submission.
pub fn validate_submission(
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
) -> Result<ContactFields, ContactValidationError> {
    let fields = validate_required(name, email, message)?;
    validate_email(&fields.email)?;
    Ok(fields)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
