//! Storage seam for the contact submission handler.
//!
//! The HTTP layer holds an `Arc<dyn ContactStore>` so the handler never
//! reaches for a global client and tests can swap in their own backend.

use async_trait::async_trait;

use crate::models::contact::{ContactSubmission, CreateContact};
use crate::repositories::ContactRepo;
use crate::DbPool;

/// Insert-only persistence for contact submissions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist one submission. Storage assigns `id` and `created_at`.
    async fn create_contact(
        &self,
        input: &CreateContact,
    ) -> Result<ContactSubmission, sqlx::Error>;
}

/// [`ContactStore`] backed by the shared Postgres pool.
#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn create_contact(
        &self,
        input: &CreateContact,
    ) -> Result<ContactSubmission, sqlx::Error> {
        ContactRepo::create(&self.pool, input).await
    }
}
