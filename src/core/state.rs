// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// Amplitudes of a simulated register of qubits, one complex entry per basis
/// state (length `2^N` for `N` qubits).
///
/// Index bits follow the engine's ordering: the qubit with the lowest id is
/// the most significant bit, so for two qubits the basis order is
/// `|00>, |01>, |10>, |11>`.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a new state from the given amplitudes.
    /// Normalization is not enforced here; see `validation::check_normalization`.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states represented.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Squared magnitude of every amplitude, i.e. the Born-rule probability of
    /// each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// Decorative orientation shown by the arrow widget.
///
/// This is not derived from the simulated circuit: it is recomputed each clock
/// tick as `[cos t, 0, sin t]` and only its `x` and `z` components are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl QuantumState {
    /// Orientation for time parameter `t`.
    pub fn from_time(t: f64) -> Self {
        Self { x: t.cos(), y: 0.0, z: t.sin() }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for QuantumState {
    /// Points straight up (`|0>` on the z axis).
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 1.0 }
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}
