// backend/src/store/mod.rs
//
// Read-only access to `public.job_postings`. Handlers talk to a
// `PostingStore` so the aggregation logic can run against Postgres in
// production and against in-memory fakes in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgPostingStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Row filter shared by every aggregate. A posting matches when its
/// application period ends at or after `active_at`, plus the optional
/// urgent / new-since conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingFilter {
    pub active_at: DateTime<Utc>,
    pub urgent_only: bool,
    /// `is_new = true AND created_at >= since`
    pub new_since: Option<DateTime<Utc>>,
}

impl PostingFilter {
    pub fn active_at(now: DateTime<Utc>) -> Self {
        Self { active_at: now, urgent_only: false, new_since: None }
    }

    pub fn urgent(mut self) -> Self {
        self.urgent_only = true;
        self
    }

    pub fn new_since(mut self, since: DateTime<Utc>) -> Self {
        self.new_since = Some(since);
        self
    }
}

#[async_trait]
pub trait PostingStore: Send + Sync {
    /// Number of postings matching `filter`; `None` when the backend
    /// produced no row.
    async fn count(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError>;

    /// Number of distinct `ministry` values among postings matching `filter`.
    async fn count_ministries(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError>;
}
