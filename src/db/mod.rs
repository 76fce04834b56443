pub mod submissions;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewSubmission, Submission};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS submissions (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    subject TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Create the submissions table if it does not exist yet. Safe to call on
/// every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Write-only storage for contact submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error>;
}

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn save(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        submissions::create(&self.pool, submission).await
    }
}
