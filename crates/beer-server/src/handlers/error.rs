//! Error responses for HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use beer_core::CatalogError;
use serde_json::json;

/// Error returned by catalogue handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        let status = match &e {
            CatalogError::BeerNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::BackendUnavailable(_) => {
                tracing::error!("Storage failure: {}", e);
                StatusCode::SERVICE_UNAVAILABLE
            }
            CatalogError::Config(_) => {
                tracing::error!("Configuration failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
