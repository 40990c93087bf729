//! Session Tokens
//!
//! Compact HMAC-signed tokens binding a subject to its issue day, with
//! expiry pinned to the next UTC midnight. Format:
//!
//! ```text
//! base64url(claims JSON) "." base64url(HMAC-SHA-256(key, claims JSON))
//! ```
//!
//! Tokens are self-contained: there is no session store and no
//! revocation list. Expiry is the only teardown mechanism.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

use crate::domain::day::{day_key, next_utc_midnight};

/// Claims bound by the token signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject identifier the session was issued to
    pub sub: String,
    /// Day key at issuance (informational; not re-checked on validate)
    pub day: String,
    /// Absolute expiry, epoch milliseconds (next UTC midnight)
    pub exp_ms: i64,
}

/// Token validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not two base64url segments separated by a dot
    #[error("Token is structurally malformed")]
    Malformed,

    /// Signature does not verify against the signing key
    #[error("Token signature does not verify")]
    InvalidSignature,

    /// Expiry instant has passed
    #[error("Token has expired")]
    Expired,
}

/// Issue a signed session token for `subject` at `now`
///
/// Returns the token and its absolute expiry instant so the caller can
/// report the expiry without re-deriving it.
pub fn issue(subject: &str, now: DateTime<Utc>, key: &[u8; 32]) -> (String, DateTime<Utc>) {
    let expires_at = next_utc_midnight(now);
    let claims = SessionClaims {
        sub: subject.to_string(),
        day: day_key(now),
        exp_ms: expires_at.timestamp_millis(),
    };

    let payload = serde_json::to_vec(&claims).expect("session claims are always serializable");
    let signature = hmac_sha256(key, &payload);

    let token = format!("{}.{}", to_base64url(&payload), to_base64url(&signature));
    (token, expires_at)
}

/// Validate a token at `now`, returning its claims
///
/// The signature is verified before the claims are parsed: payload
/// bytes are untrusted until the MAC checks out, so a tampered token
/// can never surface as successfully parsed claims.
pub fn validate(token: &str, now: DateTime<Utc>, key: &[u8; 32]) -> Result<SessionClaims, TokenError> {
    let (payload_b64, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let payload = from_base64url(payload_b64).map_err(|_| TokenError::Malformed)?;
    let signature = from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;

    let expected = hmac_sha256(key, &payload);
    if !constant_time_eq(&expected, &signature) {
        return Err(TokenError::InvalidSignature);
    }

    let claims: SessionClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if now.timestamp_millis() >= claims.exp_ms {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
