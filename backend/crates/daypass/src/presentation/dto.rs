//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Verify request
///
/// Fields are optional so that absence maps to `missing_fields`
/// instead of a framework-level deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub subject_id: Option<String>,
    pub code: Option<String>,
}

/// Verify response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Bearer token for subsequent protected requests
    pub token: String,
    /// Absolute expiry, ISO-8601 with milliseconds (UTC)
    pub expires_at_utc: String,
}
