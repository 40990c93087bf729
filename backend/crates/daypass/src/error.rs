//! Daypass Error Types
//!
//! This module provides gateway-auth error variants that integrate
//! with the unified `kernel::error::AppError` system. Each variant
//! carries a stable machine-readable wire code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Daypass-specific result type alias
pub type DaypassResult<T> = Result<T, DaypassError>;

/// Daypass-specific error variants
#[derive(Debug, Error)]
pub enum DaypassError {
    /// Subject identifier or code missing from the request
    #[error("Subject identifier and code are required")]
    MissingFields,

    /// Verification attempt limit exceeded for this subject
    #[error("Too many verification attempts")]
    TooManyAttempts,

    /// Shared secret unset: verification is disabled
    #[error("Shared secret is not configured")]
    MissingSecret,

    /// Submitted code does not match the derived daily code
    #[error("Invalid daily code")]
    InvalidCode,

    /// No bearer credential on a protected request
    #[error("Missing bearer token")]
    MissingToken,

    /// Malformed, forged, or expired session token
    ///
    /// Deliberately a single variant: the caller must not learn which
    /// case applied.
    #[error("Invalid session token")]
    InvalidToken,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DaypassError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DaypassError::MissingFields => StatusCode::BAD_REQUEST,
            DaypassError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            DaypassError::MissingSecret => StatusCode::INTERNAL_SERVER_ERROR,
            DaypassError::InvalidCode
            | DaypassError::MissingToken
            | DaypassError::InvalidToken => StatusCode::UNAUTHORIZED,
            DaypassError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DaypassError::MissingFields => ErrorKind::BadRequest,
            DaypassError::TooManyAttempts => ErrorKind::TooManyRequests,
            DaypassError::MissingSecret => ErrorKind::InternalServerError,
            DaypassError::InvalidCode
            | DaypassError::MissingToken
            | DaypassError::InvalidToken => ErrorKind::Unauthorized,
            DaypassError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable wire code
    pub fn code(&self) -> &'static str {
        match self {
            DaypassError::MissingFields => "missing_fields",
            DaypassError::TooManyAttempts => "too_many_attempts",
            DaypassError::MissingSecret => "missing_bot_secret",
            DaypassError::InvalidCode => "invalid_code",
            DaypassError::MissingToken => "missing_token",
            DaypassError::InvalidToken => "invalid_token",
            DaypassError::Internal(_) => "internal_error",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DaypassError::MissingSecret => {
                tracing::error!("BOT_SHARED_SECRET is unset, verification is disabled");
            }
            DaypassError::Internal(msg) => {
                tracing::error!(message = %msg, "Daypass internal error");
            }
            DaypassError::InvalidCode => {
                tracing::warn!("Rejected daily code attempt");
            }
            DaypassError::TooManyAttempts => {
                tracing::warn!("Verification rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Daypass error");
            }
        }
    }
}

impl From<DaypassError> for AppError {
    fn from(err: DaypassError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for DaypassError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
