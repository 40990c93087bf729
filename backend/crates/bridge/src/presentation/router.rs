//! Bridge Router

use axum::{Router, routing::post};

use crate::application::engine::EngineClient;
use crate::presentation::handlers;

/// Create the bridge router
///
/// Authentication is layered on by the caller; this router only knows
/// about dispatch.
pub fn bridge_router(engine: EngineClient) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .with_state(engine)
}
