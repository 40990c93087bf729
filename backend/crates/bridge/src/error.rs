//! Bridge Error Types
//!
//! This module provides engine-integration error variants that
//! integrate with the unified `kernel::error::AppError` system.
//! Diagnostic detail is truncated before it reaches the wire; the raw
//! stderr is only ever logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Bridge-specific result type alias
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Maximum detail length surfaced to clients
const DETAIL_LIMIT: usize = 2048;

/// Truncate a diagnostic string for the wire
pub fn truncate_detail(detail: &str) -> String {
    if detail.len() <= DETAIL_LIMIT {
        return detail.to_string();
    }
    let mut end = DETAIL_LIMIT;
    while !detail.is_char_boundary(end) {
        end -= 1;
    }
    detail[..end].to_string()
}

/// Bridge-specific error variants
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Empty or absent prompt; no process was started
    #[error("Prompt is required")]
    MissingPrompt,

    /// Engine process could not be started or its pipes failed
    #[error("Engine process I/O failed: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Engine process exited non-zero
    #[error("Engine process failed")]
    EngineFailed { details: String },

    /// Engine exited 0 but stdout was not well-formed JSON
    #[error("Engine emitted an unparsable response")]
    BadEngineResponse { details: String },

    /// Engine process exceeded its deadline and was terminated
    #[error("Engine process timed out")]
    EngineTimeout,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BridgeError::MissingPrompt => StatusCode::BAD_REQUEST,
            BridgeError::EngineTimeout => StatusCode::GATEWAY_TIMEOUT,
            BridgeError::SpawnFailed(_)
            | BridgeError::EngineFailed { .. }
            | BridgeError::BadEngineResponse { .. }
            | BridgeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::MissingPrompt => ErrorKind::BadRequest,
            BridgeError::EngineTimeout => ErrorKind::GatewayTimeout,
            BridgeError::SpawnFailed(_)
            | BridgeError::EngineFailed { .. }
            | BridgeError::BadEngineResponse { .. }
            | BridgeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable wire code
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::MissingPrompt => "missing_prompt",
            BridgeError::SpawnFailed(_) | BridgeError::EngineFailed { .. } => "rag_failed",
            BridgeError::BadEngineResponse { .. } => "bad_rag_response",
            BridgeError::EngineTimeout => "rag_timeout",
            BridgeError::Internal(_) => "internal_error",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.code());
        match self {
            BridgeError::EngineFailed { details } | BridgeError::BadEngineResponse { details }
                if !details.is_empty() =>
            {
                err.with_detail(details.clone())
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BridgeError::SpawnFailed(e) => {
                tracing::error!(error = %e, "Failed to run engine process");
            }
            BridgeError::EngineFailed { details } => {
                tracing::error!(stderr = %details, "Engine exited non-zero");
            }
            BridgeError::BadEngineResponse { details } => {
                tracing::error!(stderr = %details, "Engine response was not valid JSON");
            }
            BridgeError::EngineTimeout => {
                tracing::error!("Engine dispatch timed out");
            }
            BridgeError::Internal(msg) => {
                tracing::error!(message = %msg, "Bridge internal error");
            }
            BridgeError::MissingPrompt => {
                tracing::debug!("Chat request without prompt");
            }
        }
    }
}

impl From<BridgeError> for AppError {
    fn from(err: BridgeError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_are_stable() {
        assert_eq!(BridgeError::MissingPrompt.code(), "missing_prompt");
        assert_eq!(
            BridgeError::EngineFailed { details: String::new() }.code(),
            "rag_failed"
        );
        assert_eq!(
            BridgeError::BadEngineResponse { details: String::new() }.code(),
            "bad_rag_response"
        );
        assert_eq!(BridgeError::EngineTimeout.code(), "rag_timeout");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(BridgeError::MissingPrompt.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BridgeError::EngineTimeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            BridgeError::EngineFailed { details: String::new() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_truncate_detail() {
        assert_eq!(truncate_detail("short"), "short");

        let long = "x".repeat(5000);
        assert_eq!(truncate_detail(&long).len(), 2048);

        // Truncation never splits a multi-byte character
        let multibyte = "é".repeat(2000);
        let truncated = truncate_detail(&multibyte);
        assert!(truncated.len() <= 2048);
        assert!(truncated.is_char_boundary(truncated.len()));
    }

    #[test]
    fn test_detail_reaches_app_error() {
        let err = BridgeError::EngineFailed {
            details: "Traceback (most recent call last)".to_string(),
        };
        let app = err.to_app_error();
        assert_eq!(app.code(), "rag_failed");
        assert_eq!(app.detail(), Some("Traceback (most recent call last)"));
    }
}
