//! Application Layer

pub mod config;
pub mod engine;
