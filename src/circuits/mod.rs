// src/circuits/mod.rs

//! Ordered sequences of `Operation`s and a builder for them.

use crate::core::QubitId;
use crate::operations::Operation;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An ordered sequence of operations applied to a set of qubits.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The unique set of qubits touched by any operation.
    qubits: HashSet<QubitId>,
    /// Operations in application order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Appends an operation, registering the qubits it involves.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit in op.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.operations.push(op);
    }

    /// Appends every operation yielded by `ops`.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns a reference to the set of unique qubit ids involved in this circuit.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Qubit ids sorted ascending; this is also the engine's wire order.
    pub fn sorted_qubits(&self) -> Vec<QubitId> {
        let mut sorted: Vec<QubitId> = self.qubits.iter().copied().collect();
        sorted.sort();
        sorted
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Builds a `Circuit` by method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "Circuit[0 operations on 0 qubits]");
        }

        let ops = &self.operations;
        let num_ops = ops.len();

        let sorted_qubits = self.sorted_qubits();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> =
            sorted_qubits.iter().enumerate().map(|(i, q)| (*q, i)).collect();

        let max_label_width = sorted_qubits.iter().map(|q| q.to_string().len()).max().unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2); // Label + ": "

        // Column width fits the widest symbol plus one wire segment on each side.
        let gate_width = ops.iter().map(|op| op.symbol().chars().count()).max().unwrap_or(1).max(1) + 2;
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';
        let wire = H_WIRE.to_string().repeat(gate_width);

        // op_grid[row][time] holds the cell text, v_connect[row][time] the connector below it
        let mut op_grid: Vec<Vec<String>> = vec![vec![wire.clone(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        let format_gate = |symbol: &str| -> String {
            let total_dashes = gate_width - symbol.chars().count();
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre_dashes),
                symbol,
                H_WIRE.to_string().repeat(post_dashes)
            )
        };

        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::ControlledNot { control, target } => {
                    if let (Some(r_ctrl), Some(r_tgt)) = (qubit_to_row.get(control), qubit_to_row.get(target)) {
                        op_grid[*r_ctrl][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate(&op.symbol());

                        let r_min = (*r_ctrl).min(*r_tgt);
                        let r_max = (*r_ctrl).max(*r_tgt);
                        for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
                _ => {
                    for qubit in op.involved_qubits() {
                        if let Some(r) = qubit_to_row.get(&qubit) {
                            op_grid[*r][t] = format_gate(&op.symbol());
                        }
                    }
                }
            }
        }

        writeln!(f, "Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        for r in 0..num_qubits {
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let padding_needed = gate_width.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), v_connect[r][t], " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_tracks_qubits_and_order() {
        let q0 = QubitId(0);
        let q1 = QubitId(1);
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Hadamard { target: q0 })
            .add_op(Operation::ControlledNot { control: q0, target: q1 })
            .build();

        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.sorted_qubits(), vec![q0, q1]);
        assert_eq!(circuit.operations()[0], Operation::Hadamard { target: q0 });
    }

    #[test]
    fn test_add_ops_appends_in_order() {
        let q0 = QubitId(0);
        let q1 = QubitId(1);
        let ops = vec![
            Operation::RotateX { target: q0, theta: 0.5 },
            Operation::ControlledNot { control: q0, target: q1 },
        ];
        let circuit = CircuitBuilder::new().add_ops(ops.clone()).build();

        assert_eq!(circuit.operations(), ops.as_slice());
        assert_eq!(circuit.sorted_qubits(), vec![q0, q1]);
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(Circuit::new().to_string(), "Circuit[0 operations on 0 qubits]\n");
    }

    #[test]
    fn test_display_draws_control_link() {
        let q0 = QubitId(0);
        let q1 = QubitId(1);
        let circuit = CircuitBuilder::new()
            .add_op(Operation::ControlledNot { control: q0, target: q1 })
            .build();
        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Circuit[1 operations on 2 qubits]");
        assert!(lines[1].starts_with("q0: ") && lines[1].contains('@'));
        assert!(lines[2].contains('│'));
        assert!(lines[3].starts_with("q1: ") && lines[3].contains('X'));
    }
}
