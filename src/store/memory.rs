// backend/src/store/memory.rs
//
// Test doubles for `PostingStore`.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{PostingFilter, PostingStore, StoreError};

/// The `job_postings` columns the aggregates read.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub ministry: Option<String>,
    pub is_urgent: bool,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
    pub application_period_end: DateTime<Utc>,
}

impl PostingFilter {
    pub fn matches(&self, posting: &JobPosting) -> bool {
        if posting.application_period_end < self.active_at {
            return false;
        }
        if self.urgent_only && !posting.is_urgent {
            return false;
        }
        match self.new_since {
            Some(since) => posting.is_new && posting.created_at >= since,
            None => true,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryPostingStore {
    pub postings: Vec<JobPosting>,
}

impl MemoryPostingStore {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }
}

#[async_trait]
impl PostingStore for MemoryPostingStore {
    async fn count(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        let n = self.postings.iter().filter(|p| filter.matches(p)).count();
        Ok(Some(n as i64))
    }

    async fn count_ministries(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        // NULL is one distinct value, as with SELECT DISTINCT
        let distinct: HashSet<Option<&str>> = self
            .postings
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.ministry.as_deref())
            .collect();
        Ok(Some(distinct.len() as i64))
    }
}

/// Yields no rows at all, like an aggregate that came back empty.
pub struct EmptyPostingStore;

#[async_trait]
impl PostingStore for EmptyPostingStore {
    async fn count(&self, _filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        Ok(None)
    }

    async fn count_ministries(&self, _filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        Ok(None)
    }
}

/// Every query fails as if the pool were exhausted.
pub struct FailingPostingStore;

#[async_trait]
impl PostingStore for FailingPostingStore {
    async fn count(&self, _filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn count_ministries(&self, _filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
