//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-SHA-256, base64url)
//! - Bearer token header extraction
//! - Rate limiting infrastructure

pub mod bearer;
pub mod crypto;
pub mod rate_limit;
