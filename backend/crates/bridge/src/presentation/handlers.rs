//! HTTP Handlers

use axum::Json;
use axum::extract::State;

use crate::application::engine::EngineClient;
use crate::error::{BridgeError, BridgeResult};
use crate::presentation::dto::ChatRequest;

/// POST /chat (authenticated upstream by the daypass middleware)
///
/// Forwards the prompt to the reasoning engine and returns the
/// engine's JSON payload verbatim.
pub async fn chat(
    State(engine): State<EngineClient>,
    Json(req): Json<ChatRequest>,
) -> BridgeResult<Json<serde_json::Value>> {
    let prompt = req.prompt.ok_or(BridgeError::MissingPrompt)?;
    let payload = engine.dispatch(&prompt).await?;
    Ok(Json(payload))
}
