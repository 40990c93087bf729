//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use platform::rate_limit::{MemoryRateLimitStore, RateLimitStore};

use crate::application::config::DaypassConfig;
use crate::application::{VerifyCodeInput, VerifyCodeUseCase};
use crate::error::{DaypassError, DaypassResult};
use crate::presentation::dto::{VerifyRequest, VerifyResponse};

/// Shared state for daypass handlers
#[derive(Clone)]
pub struct DaypassAppState {
    pub config: Arc<DaypassConfig>,
    pub attempts: Arc<MemoryRateLimitStore>,
}

/// POST /auth/verify
///
/// Exchanges a subject identifier plus today's daily code for a
/// session token expiring at the next UTC midnight.
pub async fn verify_code(
    State(state): State<DaypassAppState>,
    Json(req): Json<VerifyRequest>,
) -> DaypassResult<Json<VerifyResponse>> {
    let subject_id = req
        .subject_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let code = req.code.filter(|c| !c.trim().is_empty());

    // Reject before touching the secret
    let (Some(subject_id), Some(code)) = (subject_id, code) else {
        return Err(DaypassError::MissingFields);
    };

    let window = state
        .attempts
        .check_and_increment(&subject_id, &state.config.verify_rate_limit)
        .await
        .map_err(|e| DaypassError::Internal(e.to_string()))?;
    if !window.allowed {
        return Err(DaypassError::TooManyAttempts);
    }

    let use_case = VerifyCodeUseCase::new(state.config.clone());
    let output = use_case.execute(VerifyCodeInput { subject_id, code }, Utc::now())?;

    Ok(Json(VerifyResponse {
        token: output.token,
        expires_at_utc: output
            .expires_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
