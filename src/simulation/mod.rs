// src/simulation/mod.rs

//! Simulates the execution of `chroma_clock::circuits::Circuit`.
//! This module contains the `Simulator` entry point and the internal
//! `SimulationEngine` that evolves the state vector.

mod results;
pub(crate) mod engine;

pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::ClockError;
use crate::validation::check_normalization;
use engine::SimulationEngine;

/// Runs circuits from `|0...0>` and returns the final state.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a simulation of the provided circuit.
    ///
    /// # Arguments
    /// * `circuit` - The `Circuit` definition to simulate.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` holding the final state vector.
    /// * `Err(ClockError)` if an operation is invalid or the final state is no
    ///   longer normalized.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult, ClockError> {
        if circuit.is_empty() {
            return Ok(SimulationResult::empty());
        }

        let qubits = circuit.sorted_qubits();
        let mut engine = SimulationEngine::init(&qubits)?;

        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }

        check_normalization(engine.get_state(), None)?;

        Ok(SimulationResult::new(qubits, engine.into_state()))
    }
}

#[cfg(test)]
mod tests {
    use super::engine::SimulationEngine;
    use super::*;
    use crate::core::*;
    use crate::operations::Operation;
    use num_complex::Complex;
    use num_traits::Zero;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    /// Asserts that two complex state vectors are approximately equal component-wise.
    fn assert_complex_vec_approx_equal(
        actual: &[Complex<f64>],
        expected: &[Complex<f64>],
        tolerance: f64,
        context: &str,
    ) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < tolerance * tolerance,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
                i, actual[i], expected[i], dist_sq, context
            );
        }
    }

    #[test]
    fn test_init_rejects_zero_qubits() {
        assert!(matches!(
            SimulationEngine::init(&[]),
            Err(ClockError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_flip_on_low_bit_of_three_qubits() -> Result<(), ClockError> {
        // q2 is the least significant bit: X on q2 maps |000> to |001>
        let mut engine = SimulationEngine::init(&[qid(0), qid(1), qid(2)])?;
        engine.apply_operation(&Operation::PauliX { target: qid(2) })?;

        let mut expected = vec![Complex::zero(); 8];
        expected[1] = Complex::new(1.0, 0.0);
        assert_complex_vec_approx_equal(engine.get_state().vector(), &expected, TEST_TOLERANCE, "X on q2");
        Ok(())
    }

    #[test]
    fn test_cnot_with_spectator_qubit() -> Result<(), ClockError> {
        // |0>_0 (x) H|0>_1 (x) |0>_2, then CNOT(q1 -> q2) gives (|000> + |011>)/sqrt(2)
        let mut engine = SimulationEngine::init(&[qid(0), qid(1), qid(2)])?;
        engine.apply_operation(&Operation::Hadamard { target: qid(1) })?;
        engine.apply_operation(&Operation::ControlledNot { control: qid(1), target: qid(2) })?;

        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        let mut expected = vec![Complex::zero(); 8];
        expected[0] = h;
        expected[3] = h;
        assert_complex_vec_approx_equal(engine.get_state().vector(), &expected, TEST_TOLERANCE, "Bell pair on q1,q2");
        Ok(())
    }

    #[test]
    fn test_cnot_reversed_wire_order() -> Result<(), ClockError> {
        // Control below target: start in |01>, CNOT(q1 -> q0) gives |11>
        let mut engine = SimulationEngine::init(&[qid(0), qid(1)])?;
        engine.set_state(StateVector::new(vec![
            Complex::zero(), Complex::new(1.0, 0.0), Complex::zero(), Complex::zero(),
        ]))?;
        engine.apply_operation(&Operation::ControlledNot { control: qid(1), target: qid(0) })?;

        let mut expected = vec![Complex::zero(); 4];
        expected[3] = Complex::new(1.0, 0.0);
        assert_complex_vec_approx_equal(engine.get_state().vector(), &expected, TEST_TOLERANCE, "reversed CNOT");
        Ok(())
    }

    #[test]
    fn test_marginal_probabilities() -> Result<(), ClockError> {
        // 0.6|00> + 0.8|11>
        let mut engine = SimulationEngine::init(&[qid(0), qid(1)])?;
        engine.set_state(StateVector::new(vec![
            Complex::new(0.6, 0.0), Complex::zero(), Complex::zero(), Complex::new(0.8, 0.0),
        ]))?;
        let result = SimulationResult::new(vec![qid(0), qid(1)], engine.into_state());
        let [p0, p1] = result.probabilities(&qid(0))?;
        assert!((p0 - 0.36).abs() < TEST_TOLERANCE);
        assert!((p1 - 0.64).abs() < TEST_TOLERANCE);
        assert!(matches!(result.probabilities(&qid(9)), Err(ClockError::ReferenceViolation { .. })));
        Ok(())
    }

    #[test]
    fn test_set_state_dimension_mismatch() -> Result<(), ClockError> {
        let mut engine = SimulationEngine::init(&[qid(0)])?;
        let result = engine.set_state(StateVector::new(vec![Complex::zero(); 4]));
        assert!(matches!(result, Err(ClockError::SimulationError { .. })));
        Ok(())
    }
}
