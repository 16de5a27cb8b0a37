// backend/src/error.rs

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error("failed to fetch statistics: {0}")]
    QueryFailure(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET")],
                self.to_string(),
            )
                .into_response(),
            ApiError::QueryFailure(e) => {
                tracing::error!(error = %e, "statistics API error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch statistics" })),
                )
                    .into_response()
            }
        }
    }
}
