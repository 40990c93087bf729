//! Application Error - Unified error type for the gateway
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// Every failure that reaches the HTTP boundary is represented as an
/// [`AppError`] carrying a stable machine-readable `code` (the wire
/// contract, e.g. `"invalid_code"`) plus an optional human-oriented
/// `detail` string. Clients match on `code`; `detail` is diagnostic
/// only and may be truncated.
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::unauthorized("invalid_token");
/// assert_eq!(err.code(), "invalid_token");
/// assert_eq!(err.status_code(), 401);
///
/// let err = AppError::internal("rag_failed").with_detail("engine exited with 1");
/// assert_eq!(err.detail(), Some("engine exited with 1"));
/// ```
pub struct AppError {
    /// Error classification (maps to HTTP status)
    kind: ErrorKind,
    /// Stable machine-readable code
    code: Cow<'static, str>,
    /// Diagnostic detail (optional, truncated at the boundary)
    detail: Option<Cow<'static, str>>,
    /// Original error (optional, for logging)
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result alias for `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new error with an explicit kind and wire code
    #[inline]
    pub fn new(kind: ErrorKind, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: code.into(),
            detail: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request
    #[inline]
    pub fn bad_request(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, code)
    }

    /// 401 Unauthorized
    #[inline]
    pub fn unauthorized(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, code)
    }

    /// 429 Too Many Requests
    #[inline]
    pub fn too_many_requests(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::TooManyRequests, code)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, code)
    }

    /// 504 Gateway Timeout
    #[inline]
    pub fn gateway_timeout(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::GatewayTimeout, code)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach a diagnostic detail string
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the original error (for logging)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Error classification
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Stable machine-readable code
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Diagnostic detail, if any
    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Whether this is a 5xx error
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// Whether this is a 4xx error
    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        if let Some(detail) = &self.detail {
            builder.field("detail", detail);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.code)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}
