// src/simulation/results.rs

use crate::core::{ClockError, QubitId, StateVector};
use crate::simulation::engine::marginal_from_vector;
use std::fmt;

/// Final state of a simulated circuit together with its wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Qubits in wire order (lowest id first).
    qubits: Vec<QubitId>,
    /// State after every operation has been applied.
    final_state: StateVector,
}

impl SimulationResult {
    pub(crate) fn new(qubits: Vec<QubitId>, final_state: StateVector) -> Self {
        Self { qubits, final_state }
    }

    /// An empty circuit has no qubits and a zero-dimensional state.
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), StateVector::new(Vec::new()))
    }

    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    pub fn final_state(&self) -> &StateVector {
        &self.final_state
    }

    /// Probability read-out on one qubit: `[P(0), P(1)]`, marginalized over
    /// all other qubits.
    ///
    /// Returns `ClockError::ReferenceViolation` if the qubit was not part of
    /// the circuit.
    pub fn probabilities(&self, qubit: &QubitId) -> Result<[f64; 2], ClockError> {
        let idx = self.qubits.iter().position(|q| q == qubit).ok_or_else(|| {
            ClockError::ReferenceViolation {
                message: format!("Qubit {} was not part of the simulated circuit", qubit),
            }
        })?;
        Ok(marginal_from_vector(self.final_state.vector(), self.qubits.len(), idx))
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        if self.qubits.is_empty() {
            return writeln!(f, "  No qubits were simulated.");
        }
        writeln!(f, "  Final {}", self.final_state)?;
        writeln!(f, "  Marginals:")?;
        for (idx, qubit) in self.qubits.iter().enumerate() {
            let [p0, p1] = marginal_from_vector(self.final_state.vector(), self.qubits.len(), idx);
            writeln!(f, "    {}: P(0)={:.4} P(1)={:.4}", qubit, p0, p1)?;
        }
        Ok(())
    }
}
