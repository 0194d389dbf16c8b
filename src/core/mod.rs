// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `chroma_clock::core::TypeName`
pub use error::{ClockError, QubitId};
pub use state::{QuantumState, StateVector};

pub mod constants;
pub use constants::{clock_constants, display_constants};
