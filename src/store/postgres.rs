// backend/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use super::{PostingFilter, PostingStore, StoreError};

#[derive(Clone)]
pub struct PgPostingStore {
    pool: Pool<Postgres>,
}

impl PgPostingStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn scalar(&self, mut qb: QueryBuilder<'_, Postgres>) -> Result<Option<i64>, StoreError> {
        let count = qb
            .build_query_scalar::<Option<i64>>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(count.flatten())
    }
}

fn count_query(filter: &PostingFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM public.job_postings");
    push_where(&mut qb, filter);
    qb
}

// DISTINCT keeps a NULL ministry as its own value; COUNT(DISTINCT ministry) would drop it.
fn ministries_query(filter: &PostingFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM (SELECT DISTINCT ministry FROM public.job_postings");
    push_where(&mut qb, filter);
    qb.push(") AS active_ministries");
    qb
}

fn push_where(qb: &mut QueryBuilder<'_, Postgres>, filter: &PostingFilter) {
    qb.push(" WHERE application_period_end >= ")
        .push_bind(filter.active_at);
    if filter.urgent_only {
        qb.push(" AND is_urgent = true");
    }
    if let Some(since) = filter.new_since {
        qb.push(" AND is_new = true AND created_at >= ").push_bind(since);
    }
}

#[async_trait]
impl PostingStore for PgPostingStore {
    async fn count(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        self.scalar(count_query(filter)).await
    }

    async fn count_ministries(&self, filter: &PostingFilter) -> Result<Option<i64>, StoreError> {
        self.scalar(ministries_query(filter)).await
    }
}
