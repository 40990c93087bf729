//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// Chat request
///
/// The prompt is optional so that absence maps to `missing_prompt`
/// instead of a framework-level deserialization error. The response
/// body is the engine's JSON payload verbatim; there is no response DTO.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub prompt: Option<String>,
}
