//! Application error type and its HTTP mapping.
//!
//! The public API collapses every validation failure into a
//! single `{"error": "invalid url"}` body with status 200, and every storage
//! failure into an opaque 500. Internal detail only reaches the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Body returned for every non-success outcome.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

pub const INVALID_URL_MESSAGE: &str = "invalid url";
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";
pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, disallowed scheme or unresolvable host.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Unknown or malformed short code.
    #[error("short url not found")]
    NotFound,

    /// Insert collided with an existing short code.
    #[error("short code {0} already exists")]
    DuplicateCode(i64),

    /// Insert collided with an existing original URL.
    #[error("original url already stored")]
    DuplicateUrl,

    #[error("sequence counter '{counter}' is exhausted")]
    SequenceExhausted { counter: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl(reason.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the HTTP status and the public message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidUrl(_) => (StatusCode::OK, INVALID_URL_MESSAGE),
            Self::NotFound => (StatusCode::OK, NOT_FOUND_MESSAGE),
            Self::DuplicateCode(_)
            | Self::DuplicateUrl
            | Self::SequenceExhausted { .. }
            | Self::Database(_)
            | Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        }
    }

    /// True for failures the caller caused (bad input, unknown code).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::NotFound)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if !self.is_client_error() {
            error!(error = %self, "request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidUrl(errors.to_string())
    }
}
