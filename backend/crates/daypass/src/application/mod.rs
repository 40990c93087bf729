//! Application Layer

pub mod config;
pub mod verify_code;

pub use verify_code::{VerifyCodeInput, VerifyCodeOutput, VerifyCodeUseCase};
