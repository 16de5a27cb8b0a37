// backend/src/main.rs

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod error;
mod models;
mod routes;
mod stats;
mod store;

use store::{PgPostingStore, PostingStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostingStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobstats_api=info,tower_http=info")),
        )
        .init();

    let settings = config::Settings::from_env()?;

    let pool = db::connect(&settings).await?;
    let state = AppState { store: Arc::new(PgPostingStore::new(pool)) };

    let api = routes::router(state);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API listening");

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}
