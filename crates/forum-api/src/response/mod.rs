//! Response types and error handling for API endpoints
//!
//! Every body carries a `status` of `success`, `fail` (client errors) or
//! `error` (server errors).

mod translator;

pub use translator::{translate, Translation, SERVER_FAILURE_MESSAGE};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_common::AppError;
use forum_core::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Message sent for every authentication failure
pub const MISSING_AUTH_MESSAGE: &str = "Missing authentication";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }

    fn translation(&self) -> Option<Translation> {
        self.domain().and_then(translate)
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        if let Some(t) = self.translation() {
            return t.status;
        }

        match self {
            Self::App(AppError::Domain(_)) | Self::Domain(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing message for this error
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(t) = self.translation() {
            return t.message.to_string();
        }
        if self.status_code().is_server_error() {
            return SERVER_FAILURE_MESSAGE.to_string();
        }

        match self {
            Self::App(AppError::MissingAuth | AppError::InvalidToken | AppError::TokenExpired) => {
                MISSING_AUTH_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.domain().map(DomainError::code);

        if status.is_server_error() {
            error!(error = ?self, code, "Server error occurred");
        } else {
            debug!(error = %self, code, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            status: if status.is_server_error() { "error" } else { "fail" },
            error: (status == StatusCode::UNAUTHORIZED)
                .then(|| status.canonical_reason())
                .flatten(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct Success<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Success<T> {
    /// Envelope carrying a `data` object
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl Success<()> {
    /// Envelope with no `data`
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
