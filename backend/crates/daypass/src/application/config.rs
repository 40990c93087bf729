//! Application Configuration
//!
//! Configuration for the Daypass application layer. Loaded once at
//! startup and immutable afterwards; components receive it explicitly
//! so tests can inject secrets deterministically.

use platform::rate_limit::RateLimitConfig;

use crate::domain::code::DEFAULT_CODE_LENGTH;

/// Daypass application configuration
#[derive(Debug, Clone)]
pub struct DaypassConfig {
    /// Shared secret for daily code derivation
    ///
    /// `None` disables the verification endpoint (fail closed); it is
    /// never substituted with a default.
    pub shared_secret: Option<String>,
    /// Session token signing key (32 bytes)
    pub signing_key: [u8; 32],
    /// Daily code length in decimal digits
    pub code_length: usize,
    /// Per-subject attempt limit on the verification endpoint
    pub verify_rate_limit: RateLimitConfig,
}

impl Default for DaypassConfig {
    fn default() -> Self {
        Self {
            shared_secret: None,
            signing_key: [0u8; 32],
            code_length: DEFAULT_CODE_LENGTH,
            verify_rate_limit: RateLimitConfig::new(10, 60),
        }
    }
}

impl DaypassConfig {
    /// Create config with a random signing key (for development)
    pub fn with_random_key() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut signing_key = [0u8; 32];
        signing_key.copy_from_slice(&bytes);
        Self {
            signing_key,
            ..Default::default()
        }
    }

    /// Create config for development: random key, verification disabled
    pub fn development() -> Self {
        Self::with_random_key()
    }

    /// Derive a 32-byte signing key from an operator-provided secret string
    pub fn signing_key_from_secret(secret: &str) -> [u8; 32] {
        platform::crypto::sha256(secret.as_bytes())
    }
}
