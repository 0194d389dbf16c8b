// src/simulation/engine.rs

use crate::core::{ClockError, QubitId, StateVector};
use crate::operations::Operation;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use std::collections::HashMap;

/// Holds and evolves the global state vector of a set of qubits.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Maps qubit ids to their wire index (0..N-1).
    qubit_indices: HashMap<QubitId, usize>,
    /// The global state vector, dimension `2^N`.
    global_state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine in `|0...0>` for the given qubits.
    /// `qubits` must be sorted; position in the slice is the wire index.
    pub(crate) fn init(qubits: &[QubitId]) -> Result<Self, ClockError> {
        if qubits.is_empty() {
            return Err(ClockError::InvalidOperation {
                message: "Cannot initialize simulation engine with zero qubits".to_string(),
            });
        }

        let num_qubits = qubits.len();
        let dim = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or_else(|| ClockError::SimulationError {
                message: "Number of qubits too large, state vector dimension overflows usize".to_string(),
            })?;

        let qubit_indices: HashMap<QubitId, usize> =
            qubits.iter().enumerate().map(|(index, q)| (*q, index)).collect();
        if qubit_indices.len() != num_qubits {
            return Err(ClockError::InvalidOperation {
                message: "Duplicate qubit ids passed to simulation engine".to_string(),
            });
        }

        let mut initial_vec = vec![Complex::zero(); dim];
        initial_vec[0] = Complex::new(1.0, 0.0);

        Ok(Self {
            qubit_indices,
            global_state: StateVector::new(initial_vec),
            num_qubits,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), ClockError> {
        if state.dim() != self.global_state.dim() {
            Err(ClockError::SimulationError {
                message: format!(
                    "Cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.global_state.dim()
                ),
            })
        } else {
            self.global_state = state;
            Ok(())
        }
    }

    pub(crate) fn get_state(&self) -> &StateVector {
        &self.global_state
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.global_state
    }

    /// Applies one operation to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), ClockError> {
        match op {
            Operation::ControlledNot { control, target } => {
                let control_idx = self.get_qubit_index(control)?;
                let target_idx = self.get_qubit_index(target)?;

                if control_idx == target_idx {
                    return Err(ClockError::InvalidOperation {
                        message: "Control and target qubits cannot be the same for controlled operation".to_string(),
                    });
                }

                let one = Complex::new(1.0, 0.0);
                let zero = Complex::zero();
                // Basis order: |control, target> -> |00>, |01>, |10>, |11>
                let cnot_matrix: [[Complex<f64>; 4]; 4] = [
                    [one, zero, zero, zero],
                    [zero, one, zero, zero],
                    [zero, zero, zero, one],
                    [zero, zero, one, zero],
                ];
                self.apply_two_qubit_gate(control_idx, target_idx, &cnot_matrix)?;
            }
            _ => {
                let target = op.involved_qubits()[0];
                let target_idx = self.get_qubit_index(&target)?;
                let matrix = op.single_qubit_matrix().ok_or_else(|| ClockError::InvalidOperation {
                    message: format!("Operation {:?} has no single-qubit matrix", op),
                })?;
                self.apply_single_qubit_gate(target_idx, &matrix)?;
            }
        }
        Ok(())
    }

    fn get_qubit_index(&self, qubit: &QubitId) -> Result<usize, ClockError> {
        self.qubit_indices.get(qubit).copied().ok_or_else(|| ClockError::ReferenceViolation {
            message: format!("Qubit {} not found in simulation context", qubit),
        })
    }

    /// Applies a 2x2 matrix to one qubit of the global state vector.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &[[Complex<f64>; 2]; 2]) -> Result<(), ClockError> {
        let k = self.num_qubits - 1 - target_idx; // Bit position (from right, 0-based)
        let k_mask = 1 << k;
        let lower_mask = k_mask - 1;
        let upper_mask = !((k_mask << 1) - 1);

        let dim = self.global_state.dim();
        let mut new_vec = vec![Complex::zero(); dim];

        // Iterate over pairs of basis states differing only at the target bit
        for i in 0..dim / 2 {
            let i0 = ((i << 1) & upper_mask) | (i & lower_mask);
            let i1 = i0 | k_mask;

            if i1 >= dim {
                return Err(ClockError::SimulationError {
                    message: format!(
                        "Calculated index out of bounds during single qubit gate application. i0={}, i1={}, dim={}",
                        i0, i1, dim
                    ),
                });
            }

            let psi_0 = self.global_state.vector()[i0];
            let psi_1 = self.global_state.vector()[i1];

            new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.global_state = StateVector::new(new_vec);
        Ok(())
    }

    /// Applies a 4x4 matrix to two qubits of the global state vector.
    /// Matrix rows/columns are ordered `|b1 b2>` where `b1` belongs to `idx1`.
    fn apply_two_qubit_gate(
        &mut self,
        idx1: usize,
        idx2: usize,
        matrix: &[[Complex<f64>; 4]; 4],
    ) -> Result<(), ClockError> {
        if idx1 == idx2 {
            return Err(ClockError::InvalidOperation {
                message: "Target indices for a two-qubit gate cannot be the same".to_string(),
            });
        }

        let n = self.num_qubits;
        let dim = self.global_state.dim();
        let mut new_vec = vec![Complex::zero(); dim];

        let k1 = n - 1 - idx1;
        let k2 = n - 1 - idx2;
        let (k_hi, k_lo) = (k1.max(k2), k1.min(k2));

        // Walk all basis indices with zeros at both positions.
        for i_other in 0..(dim / 4) {
            let lower = i_other & ((1 << k_lo) - 1);
            let rest = i_other >> k_lo;
            let middle = (rest & ((1 << (k_hi - k_lo - 1)) - 1)) << (k_lo + 1);
            let upper = (rest >> (k_hi - k_lo - 1)) << (k_hi + 1);
            let i_base = upper | middle | lower;

            let indices = [
                i_base,
                i_base | (1 << k2),
                i_base | (1 << k1),
                i_base | (1 << k1) | (1 << k2),
            ];

            let mut psi = [Complex::zero(); 4];
            for (slot, &index) in psi.iter_mut().zip(indices.iter()) {
                if index >= dim {
                    return Err(ClockError::SimulationError {
                        message: format!(
                            "Calculated index out of bounds during two qubit gate application. Index={}, dim={}",
                            index, dim
                        ),
                    });
                }
                *slot = self.global_state.vector()[index];
            }

            for (row, &index) in indices.iter().enumerate() {
                let mut acc = Complex::zero();
                for (col, amp) in psi.iter().enumerate() {
                    acc += matrix[row][col] * amp;
                }
                new_vec[index] = acc;
            }
        }

        self.global_state = StateVector::new(new_vec);
        Ok(())
    }
}

/// Sums `|c_k|^2` over basis states by the value of the bit for wire `idx`.
pub(crate) fn marginal_from_vector(vector: &[Complex<f64>], num_qubits: usize, idx: usize) -> [f64; 2] {
    let bit_pos = num_qubits - 1 - idx;
    let mut probs = [0.0, 0.0];
    for (k, amp) in vector.iter().enumerate() {
        probs[(k >> bit_pos) & 1] += amp.norm_sqr();
    }
    probs
}
