//! Domain Layer
//!
//! Pure computations with no I/O and no shared mutable state.

pub mod code;
pub mod day;
pub mod token;
