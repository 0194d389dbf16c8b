// tests/simulation_tests.rs

use chroma_clock::{
    Circuit, CircuitBuilder, ClockError, Operation, QubitId, QuantumHueGenerator, simulation::Simulator,
};

use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-9;

// Helper function to create QubitId for tests
fn qid(id: u64) -> QubitId {
    QubitId(id)
}

// Helper to check a qubit's read-out against expected [P(0), P(1)]
fn check_probabilities(actual: [f64; 2], expected: [f64; 2], context: &str) {
    assert!(
        (actual[0] - expected[0]).abs() < TOLERANCE && (actual[1] - expected[1]).abs() < TOLERANCE,
        "{}: expected {:?}, got {:?}",
        context,
        expected,
        actual
    );
}

#[test]
fn test_empty_circuit() -> Result<(), ClockError> {
    let circuit = Circuit::new();
    let result = Simulator::new().run(&circuit)?;

    assert!(result.qubits().is_empty(), "Empty circuit should simulate no qubits");
    assert!(result.probabilities(&qid(0)).is_err());
    Ok(())
}

#[test]
fn test_pauli_x_flips() -> Result<(), ClockError> {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new().add_op(Operation::PauliX { target: q0 }).build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [0.0, 1.0], "X|0>");
    Ok(())
}

#[test]
fn test_phase_gates_do_not_change_probabilities() -> Result<(), ClockError> {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Hadamard { target: q0 })
        .add_op(Operation::PhaseShift { target: q0, theta: PI / 3.0 })
        .add_op(Operation::RotateZ { target: q0, theta: 1.2 })
        .build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [0.5, 0.5], "phase after H");
    Ok(())
}

#[test]
fn test_rotate_x_pi_flips() -> Result<(), ClockError> {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new().add_op(Operation::RotateX { target: q0, theta: PI }).build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [0.0, 1.0], "RX(pi)|0>");
    Ok(())
}

#[test]
fn test_rotate_y_half_pi_balances() -> Result<(), ClockError> {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new().add_op(Operation::RotateY { target: q0, theta: PI / 2.0 }).build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [0.5, 0.5], "RY(pi/2)|0>");
    Ok(())
}

#[test]
fn test_cnot_control0_leaves_target() -> Result<(), ClockError> {
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::ControlledNot { control: q0, target: q1 })
        .build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [1.0, 0.0], "control");
    check_probabilities(result.probabilities(&q1)?, [1.0, 0.0], "target");
    Ok(())
}

#[test]
fn test_cnot_control1_flips_target() -> Result<(), ClockError> {
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::PauliX { target: q0 })
        .add_op(Operation::ControlledNot { control: q0, target: q1 })
        .build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q0)?, [0.0, 1.0], "control");
    check_probabilities(result.probabilities(&q1)?, [0.0, 1.0], "target");
    Ok(())
}

#[test]
fn test_cnot_copies_marginal_to_target() -> Result<(), ClockError> {
    // After CNOT the target's marginal equals the control's
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::RotateY { target: q0, theta: 1.0 })
        .add_op(Operation::ControlledNot { control: q0, target: q1 })
        .build();
    let result = Simulator::new().run(&circuit)?;

    check_probabilities(result.probabilities(&q1)?, result.probabilities(&q0)?, "entangled marginals");
    Ok(())
}

#[test]
fn test_result_state_and_report() -> Result<(), ClockError> {
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::PauliX { target: q0 })
        .add_op(Operation::Hadamard { target: q1 })
        .add_op(Operation::Hadamard { target: q1 })
        .build();
    let result = Simulator::new().run(&circuit)?;

    // |10>: only basis index 2 is populated
    let probs = result.final_state().probabilities();
    assert_eq!(result.final_state().dim(), 4);
    assert!((probs[2] - 1.0).abs() < TOLERANCE);

    let report = result.to_string();
    assert!(report.starts_with("Simulation Results:"));
    assert!(report.contains("q0: P(0)=0.0000 P(1)=1.0000"), "{}", report);
    assert!(report.contains("q1: P(0)=1.0000 P(1)=0.0000"), "{}", report);

    let empty = Simulator::new().run(&Circuit::new())?;
    assert!(empty.to_string().contains("No qubits were simulated."));
    Ok(())
}

#[test]
fn test_cnot_same_qubit_is_invalid() {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::ControlledNot { control: q0, target: q0 })
        .build();

    match Simulator::new().run(&circuit) {
        Err(ClockError::InvalidOperation { message }) => {
            assert!(message.contains("cannot be the same"), "Incorrect error message: {}", message);
        }
        other => panic!("Expected InvalidOperation error, got {:?}", other),
    }
}

#[test]
fn test_unknown_qubit_readout() -> Result<(), ClockError> {
    let circuit = CircuitBuilder::new().add_op(Operation::Hadamard { target: qid(0) }).build();
    let result = Simulator::new().run(&circuit)?;

    assert!(matches!(result.probabilities(&qid(5)), Err(ClockError::ReferenceViolation { .. })));
    Ok(())
}

#[test]
fn test_hue_circuit_layout() -> Result<(), ClockError> {
    let generator = QuantumHueGenerator::new()?;
    let circuit = generator.circuit(2.0);

    assert_eq!(
        circuit.operations(),
        &[
            Operation::RotateX { target: qid(0), theta: 2.0 },
            Operation::RotateY { target: qid(0), theta: 1.0 },
            Operation::ControlledNot { control: qid(0), target: qid(1) },
        ]
    );
    let diagram = circuit.to_string();
    assert!(diagram.contains("Rx(2.00)") && diagram.contains("Ry(1.00)"));
    Ok(())
}

#[test]
fn test_hue_probabilities_stay_in_unit_interval() -> Result<(), ClockError> {
    let generator = QuantumHueGenerator::new()?;
    let mut t = -50.0;
    while t < 50.0 {
        let [p0, p1] = generator.probabilities(t)?;
        assert!((0.0..=1.0 + TOLERANCE).contains(&p0), "t={} p0={}", t, p0);
        assert!((0.0..=1.0 + TOLERANCE).contains(&p1), "t={} p1={}", t, p1);
        t += 0.173;
    }
    Ok(())
}

#[test]
fn test_hue_baselines() -> Result<(), ClockError> {
    let generator = QuantumHueGenerator::new()?;
    check_probabilities(generator.probabilities(0.0)?, [1.0, 0.0], "t=0");
    check_probabilities(generator.probabilities(PI)?, [0.5, 0.5], "t=pi");
    check_probabilities(generator.probabilities(2.0 * PI)?, [0.0, 1.0], "t=2pi");
    Ok(())
}
