// src/operations/mod.rs

//! Gate operations understood by the simulator.
//!
//! Every operation acts on the register's `StateVector` as a unitary; there
//! is no measurement operation. Outcome probabilities are read from the
//! final state instead (see `SimulationResult::probabilities`).

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;

/// A single step of a `Circuit`.
#[derive(Debug, Clone, PartialEq)] // Using PartialEq for simplicity; f64 comparison needs care in practice.
pub enum Operation {
    /// Bit flip (Pauli X).
    PauliX {
        target: QubitId,
    },

    /// Equal-weight superposition (Hadamard).
    Hadamard {
        target: QubitId,
    },

    /// Rotation about the X axis: `RX(θ) = exp(-iθX/2)`.
    RotateX {
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Rotation about the Y axis: `RY(θ) = exp(-iθY/2)`.
    RotateY {
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Rotation about the Z axis: `RZ(θ) = exp(-iθZ/2)`.
    RotateZ {
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Applies `e^(iθ)` to the `|1>` component only.
    PhaseShift {
        target: QubitId,
        theta: f64,
    },

    /// Flips `target` when `control` is `|1>`.
    ControlledNot {
        control: QubitId,
        target: QubitId,
    },
}

impl Operation {
    /// Returns a list of all qubit ids mentioned in the operation's parameters.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::PauliX { target }
            | Operation::Hadamard { target }
            | Operation::RotateX { target, .. }
            | Operation::RotateY { target, .. }
            | Operation::RotateZ { target, .. }
            | Operation::PhaseShift { target, .. } => vec![*target],
            Operation::ControlledNot { control, target } => vec![*control, *target],
        }
    }

    /// Short label used by the circuit diagram.
    pub fn symbol(&self) -> String {
        match self {
            Operation::PauliX { .. } => "X".to_string(),
            Operation::Hadamard { .. } => "H".to_string(),
            Operation::RotateX { theta, .. } => format!("Rx({:.2})", theta),
            Operation::RotateY { theta, .. } => format!("Ry({:.2})", theta),
            Operation::RotateZ { theta, .. } => format!("Rz({:.2})", theta),
            Operation::PhaseShift { theta, .. } => format!("P({:.2})", theta),
            Operation::ControlledNot { .. } => "X".to_string(),
        }
    }

    /// The 2x2 matrix of a single-qubit operation, or `None` for `ControlledNot`.
    pub fn single_qubit_matrix(&self) -> Option<[[Complex<f64>; 2]; 2]> {
        let one = Complex::new(1.0, 0.0);
        let zero = Complex::zero();
        match self {
            Operation::PauliX { .. } => Some([[zero, one], [one, zero]]),
            Operation::Hadamard { .. } => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                Some([[h, h], [h, -h]])
            }
            Operation::RotateX { theta, .. } => {
                let (sin_a, cos_a) = (theta / 2.0).sin_cos();
                let minus_i_sin = Complex::new(0.0, -sin_a);
                // RX(θ) = [[cos(θ/2), -i sin(θ/2)], [-i sin(θ/2), cos(θ/2)]]
                Some([
                    [Complex::new(cos_a, 0.0), minus_i_sin],
                    [minus_i_sin, Complex::new(cos_a, 0.0)],
                ])
            }
            Operation::RotateY { theta, .. } => {
                let (sin_a, cos_a) = (theta / 2.0).sin_cos();
                // RY(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]
                Some([
                    [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
                    [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
                ])
            }
            Operation::RotateZ { theta, .. } => {
                let half = theta / 2.0;
                Some([
                    [Complex::from_polar(1.0, -half), zero],
                    [zero, Complex::from_polar(1.0, half)],
                ])
            }
            Operation::PhaseShift { theta, .. } => Some([
                [one, zero],
                [zero, Complex::new(theta.cos(), theta.sin())], // e^(i*theta)
            ]),
            Operation::ControlledNot { .. } => None,
        }
    }
}
