//! Unified error types for the Lumina Studio API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AnalyticsError` / `GeoError` / `NotifyError`: outbound client errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::FieldError;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Analytics dispatch errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Analytics endpoint rejected event: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Geolocation lookup errors. Always recoverable - callers fall back to
/// the default region.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup timed out")]
    Timeout,

    #[error("Provider returned malformed data: {0}")]
    Malformed(String),
}

/// Contact delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Delivery rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("No delivery channel configured")]
    Unconfigured,
}

impl NotifyError {
    /// Coarse category string attached to submit-error analytics events
    pub fn category(&self) -> &'static str {
        match self {
            NotifyError::Request(_) => "network",
            NotifyError::Rejected { .. } => "rejected",
            NotifyError::Unconfigured => "unconfigured",
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Delivery error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Invalid(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, fields) = match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg), None)
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg),
                None,
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::Analytics(e) => {
                // Analytics must never fail a user-facing request; this arm
                // only fires if a handler propagates instead of logging.
                tracing::error!("Analytics error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::Notify(e) => {
                tracing::error!("Contact delivery failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Could not send your message. Please check your connection and try again.",
                    None,
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg), None)
            }
            AppError::Invalid(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed",
                None,
                Some(fields),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg), None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_error_categories() {
        assert_eq!(
            NotifyError::Rejected {
                status: 500,
                message: "boom".to_string()
            }
            .category(),
            "rejected"
        );
        assert_eq!(NotifyError::Unconfigured.category(), "unconfigured");
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = AppError::NotFound("post x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let resp = AppError::Invalid(vec![]).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn delivery_failure_maps_to_502() {
        let resp = AppError::Notify(NotifyError::Unconfigured).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
