// backend/src/db/mod.rs

use sqlx::{Pool, Postgres};

use crate::config::Settings;

pub async fn connect(settings: &Settings) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    tracing::info!(max_connections = settings.max_connections, "connected to PostgreSQL");
    Ok(pool)
}
