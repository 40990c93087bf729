//! Bearer Token Extraction
//!
//! Common helpers for pulling a bearer credential out of the standard
//! Authorization header.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, or does
/// not use the `Bearer` scheme. An empty credential is treated as absent.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
