//! Daypass Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::rate_limit::MemoryRateLimitStore;

use crate::application::config::DaypassConfig;
use crate::presentation::handlers::{self, DaypassAppState};

/// Create the daypass router
pub fn daypass_router(config: Arc<DaypassConfig>) -> Router {
    let state = DaypassAppState {
        config,
        attempts: Arc::new(MemoryRateLimitStore::new()),
    };

    Router::new()
        .route("/verify", post(handlers::verify_code))
        .with_state(state)
}
