//! Mapping from core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kgv_core::KgvError;
use serde_json::json;

/// Handler error: a `KgvError` rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct AppError(pub KgvError);

impl From<KgvError> for AppError {
    fn from(err: KgvError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.0.is_not_found() {
            tracing::debug!(error = %self.0, "Request miss");
        } else {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
