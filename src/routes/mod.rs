use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod health;
pub mod statistics;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // every method lands in the handler; only GET is served
        .route("/api/statistics", any(statistics::get_statistics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
