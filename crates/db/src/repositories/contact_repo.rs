//! Repository for the `contacts` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{ContactSubmission, CreateContact};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, message, created_at";

/// Provides insert and lookup operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new submission, returning the full row with its assigned
    /// `id` and `created_at`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContact,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    ///
    /// Not exposed over HTTP; the service has no read API. Used to verify
    /// stored rows from tests and operational tooling.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
