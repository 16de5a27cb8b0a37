// backend/src/stats.rs

use chrono::{DateTime, Duration, Utc};

use crate::{
    models::Statistics,
    store::{PostingFilter, PostingStore, StoreError},
};

/// How far back `created_at` may lie for a posting to count as new.
pub const NEW_POSTING_WINDOW_DAYS: i64 = 7;

/// Aggregates active postings as of `now`. The four lookups are independent
/// snapshot reads and run concurrently; the first failure wins.
pub async fn collect(store: &dyn PostingStore, now: DateTime<Utc>) -> Result<Statistics, StoreError> {
    let active = PostingFilter::active_at(now);
    let urgent = active.urgent();
    let fresh = active.new_since(now - Duration::days(NEW_POSTING_WINDOW_DAYS));

    let (total_jobs, urgent_jobs, new_jobs, ministries) = tokio::try_join!(
        store.count(&active),
        store.count(&urgent),
        store.count(&fresh),
        store.count_ministries(&active),
    )?;

    Ok(Statistics {
        total_jobs: total_jobs.unwrap_or(0),
        urgent_jobs: urgent_jobs.unwrap_or(0),
        new_jobs: new_jobs.unwrap_or(0),
        ministries: ministries.unwrap_or(0),
    })
}
