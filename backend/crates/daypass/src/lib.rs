//! Daypass - Daily One-Time-Code Authentication Gateway
//!
//! Clean Architecture structure:
//! - `domain/` - Pure logic: day keys, code derivation, token signing
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Security Model
//! - No persistent accounts: trust derives from knowledge of a daily
//!   code shared out-of-band with a bot/operator
//! - Codes are HMAC-derived, never stored, and roll at UTC midnight
//! - Sessions are self-contained HMAC-signed bearer tokens expiring at
//!   the next UTC midnight; expiry is the only teardown
//! - Verification fails closed when the shared secret is unset
//! - Per-subject attempt rate limiting on the verification endpoint

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DaypassConfig;
pub use error::{DaypassError, DaypassResult};
pub use presentation::middleware::{AuthSubject, DaypassMiddlewareState, require_daily_session};
pub use presentation::router::daypass_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
