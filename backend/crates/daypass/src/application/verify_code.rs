//! Verify Code Use Case

use chrono::{DateTime, Utc};
use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::config::DaypassConfig;
use crate::domain::code::{derive_daily_code, normalize_code};
use crate::domain::day::day_key;
use crate::domain::token;
use crate::error::{DaypassError, DaypassResult};

/// Input DTO for code verification
#[derive(Debug, Clone)]
pub struct VerifyCodeInput {
    pub subject_id: String,
    pub code: String,
}

/// Output DTO for code verification
#[derive(Debug, Clone)]
pub struct VerifyCodeOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Verify Code Use Case
///
/// Compares a submitted code against the derived daily code for the
/// current UTC day and issues a session token on match. Stateless: no
/// persistence, no counters beyond the caller's rate limiting.
pub struct VerifyCodeUseCase {
    config: Arc<DaypassConfig>,
}

impl VerifyCodeUseCase {
    pub fn new(config: Arc<DaypassConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: VerifyCodeInput, now: DateTime<Utc>) -> DaypassResult<VerifyCodeOutput> {
        let secret = self
            .config
            .shared_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(DaypassError::MissingSecret)?;

        let day = day_key(now);
        let expected = derive_daily_code(&input.subject_id, &day, secret, self.config.code_length)
            .ok_or(DaypassError::MissingSecret)?;

        let submitted = normalize_code(&input.code);
        if !constant_time_eq(expected.as_bytes(), submitted.as_bytes()) {
            tracing::warn!(subject_id = %input.subject_id, "Daily code mismatch");
            return Err(DaypassError::InvalidCode);
        }

        let (token, expires_at) = token::issue(&input.subject_id, now, &self.config.signing_key);

        tracing::info!(
            subject_id = %input.subject_id,
            day = %day,
            expires_at = %expires_at,
            "Daily code verified, session issued"
        );

        Ok(VerifyCodeOutput { token, expires_at })
    }
}
