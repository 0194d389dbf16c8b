//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Identifier of a simulated qubit (a circuit wire).
/// Ordering matters: the lowest id becomes the most significant bit of a
/// basis-state index inside the simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Errors produced by the clock's simulation, color and zone logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum ClockError {
    /// The state vector lost normalization.
    #[error("Incoherence: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// An operation is inconsistent with the current circuit or state.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// A qubit was referenced that the simulation does not know about.
    #[error("Reference Violation: {message}")]
    ReferenceViolation {
        /// ReferenceViolation failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    #[error("Simulation Process Error: {message}")]
    SimulationError {
        /// SimulationError failure message
        message: String,
    },

    /// The zone table does not cover the day exactly once.
    #[error("Invalid Zone Table: {message}")]
    InvalidZoneTable {
        /// InvalidZoneTable failure message
        message: String,
    },

    /// A color string could not be decoded.
    #[error("Invalid Color '{input}': {message}")]
    InvalidColor {
        /// The offending input
        input: String,
        /// InvalidColor failure message
        message: String,
    },

    /// The noise distribution could not be constructed.
    #[error("Invalid Noise Parameters: {message}")]
    InvalidNoise {
        /// InvalidNoise failure message
        message: String,
    },
}
