//! Contact submission entity model and DTOs.

use folio_core::contact::{self, ContactFields, ContactValidationError};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
///
/// Rows are insert-only; nothing in this crate updates or deletes them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// Raw contact form payload as posted by the browser.
///
/// Every field is optional here so that absent keys and `null` values reach
/// validation and are reported as missing rather than as a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// DTO for inserting a validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Apply the contact validation policy, yielding an insertable DTO.
    pub fn validate(self) -> Result<CreateContact, ContactValidationError> {
        let ContactFields {
            name,
            email,
            message,
        } = contact::validate_submission(self.name, self.email, self.message)?;

        Ok(CreateContact {
            name,
            email,
            message,
        })
    }
}
