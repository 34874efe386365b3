//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure that reaches a handler and implements
//! Axum's `IntoResponse` so errors become JSON bodies with a matching status.
//!
//! Error mappings:
//! - `InvalidPageRequest`, `InvalidRepositoryName`, `NotificationNotConfigured` → 400
//! - `NotFound` → 404
//! - `UpstreamUnavailable`, `NotificationFailed` → 502
//! - an upstream 404 becomes `NotFound`; upstream 401/403 stay 502 but are
//!   not retryable
//! - `Internal` → 500
//!
//! Per-repository fetch failures never become an `AppError`; the aggregator
//! drops that repository's contribution instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::github::UpstreamError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(UpstreamError),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Invalid repository name: {0}")]
    InvalidRepositoryName(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Notification sink is not configured")]
    NotificationNotConfigured,

    #[error("Notification failed")]
    NotificationFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UpstreamUnavailable(_) | AppError::NotificationFailed => {
                StatusCode::BAD_GATEWAY
            }
            AppError::InvalidPageRequest(_)
            | AppError::InvalidRepositoryName(_)
            | AppError::NotificationNotConfigured => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether reloading the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::UpstreamUnavailable(e) => !matches!(e.status(), Some(401 | 403 | 404)),
            AppError::NotificationFailed => true,
            _ => false,
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e.status() {
            Some(404) => AppError::NotFound(e.to_string()),
            _ => AppError::UpstreamUnavailable(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "retryable": self.is_retryable(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
