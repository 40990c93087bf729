//! Auth Middleware
//!
//! Middleware for requiring a valid daily session on protected routes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::sync::Arc;

use crate::application::config::DaypassConfig;
use crate::domain::token;
use crate::error::DaypassError;

/// Middleware state
#[derive(Clone)]
pub struct DaypassMiddlewareState {
    pub config: Arc<DaypassConfig>,
}

/// Identity attached to authenticated requests
#[derive(Debug, Clone)]
pub struct AuthSubject {
    pub subject_id: String,
    /// Day key at issuance (audit only)
    pub day_key: String,
}

/// Middleware that requires a valid daily session token
///
/// Expired and never-valid tokens produce the same `invalid_token`
/// rejection so callers cannot tell which case applied.
pub async fn require_daily_session(
    state: DaypassMiddlewareState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(bearer) = platform::bearer::extract_bearer(req.headers()) else {
        return Err(DaypassError::MissingToken.into_response());
    };

    match token::validate(&bearer, Utc::now(), &state.config.signing_key) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthSubject {
                subject_id: claims.sub,
                day_key: claims.day,
            });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            Err(DaypassError::InvalidToken.into_response())
        }
    }
}
