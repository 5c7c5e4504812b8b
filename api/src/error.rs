//! Unified error types for the Movies API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Store and service errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.parts();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, error, details) =
            AppError::Domain(DomainError::NotFound("Movie 9 not found".into())).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error, "Not found");
        assert_eq!(details.as_deref(), Some("Movie 9 not found"));
    }

    #[test]
    fn bad_request_maps_to_400() {
        let (status, error, details) = AppError::BadRequest("expected value".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Bad request");
        assert_eq!(details.as_deref(), Some("expected value"));
    }

    #[test]
    fn internal_errors_hide_details() {
        let (status, error, details) =
            AppError::Domain(DomainError::Internal("lock lost".into())).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Internal server error");
        assert!(details.is_none());
    }

    #[test]
    fn into_response_carries_status() {
        let response = AppError::BadRequest("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Internal server error".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"Internal server error"}"#);
    }

    #[test]
    fn domain_error_display() {
        let err = DomainError::NotFound("Movie 1 not found".into());
        assert_eq!(err.to_string(), "Entity not found: Movie 1 not found");
    }
}
