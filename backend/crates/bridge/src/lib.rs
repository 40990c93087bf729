//! Bridge - Subprocess Query-Dispatch to the Reasoning Engine
//!
//! Structure:
//! - `application/` - Engine client, configuration
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Protocol Model
//! - The reasoning engine is an opaque child process: one JSON request
//!   on stdin, one JSON response on stdout, diagnostics on stderr
//! - stdout and stderr are drained concurrently with waiting for exit
//! - Concurrent engine processes are bounded by a semaphore
//! - A hard deadline terminates hung engine processes
//! - No retry: one prompt maps to at most one process invocation

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BridgeConfig;
pub use application::engine::EngineClient;
pub use error::{BridgeError, BridgeResult};
pub use presentation::router::bridge_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
