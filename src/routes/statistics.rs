// backend/src/routes/statistics.rs

use axum::{extract::State, http::Method, Json};
use chrono::Utc;

use crate::{error::ApiError, models::Statistics, stats, AppState};

pub async fn get_statistics(
    method: Method,
    State(state): State<AppState>,
) -> Result<Json<Statistics>, ApiError> {
    // HEAD and OPTIONS included
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed(method));
    }

    let stats = stats::collect(state.store.as_ref(), Utc::now()).await?;
    Ok(Json(stats))
}
