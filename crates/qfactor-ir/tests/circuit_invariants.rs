//! Property-based tests for circuit validation.
//!
//! Every accepted instruction references only declared qubits, and the
//! instruction list keeps append order.

use proptest::prelude::*;
use qfactor_ir::{Circuit, IrError, QubitId, StandardGate};

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    CX(u32, u32),
    CZPow(u32, u32, f64),
}

impl GateOp {
    fn gate(&self) -> StandardGate {
        match self {
            GateOp::H(_) => StandardGate::H,
            GateOp::X(_) => StandardGate::X,
            GateOp::CX(_, _) => StandardGate::CX,
            GateOp::CZPow(_, _, t) => StandardGate::CZPow(*t),
        }
    }

    fn qubits(&self) -> Vec<QubitId> {
        match self {
            GateOp::H(q) | GateOp::X(q) => vec![QubitId(*q)],
            GateOp::CX(a, b) | GateOp::CZPow(a, b, _) => vec![QubitId(*a), QubitId(*b)],
        }
    }
}

fn arb_gate_op(max_qubit: u32) -> impl Strategy<Value = GateOp> {
    prop_oneof![
        (0..max_qubit).prop_map(GateOp::H),
        (0..max_qubit).prop_map(GateOp::X),
        (0..max_qubit, 0..max_qubit).prop_map(|(a, b)| GateOp::CX(a, b)),
        (0..max_qubit, 0..max_qubit, 0.0_f64..1.0).prop_map(|(a, b, t)| GateOp::CZPow(a, b, t)),
    ]
}

proptest! {
    #[test]
    fn accepted_ops_reference_declared_qubits(
        size in 1_u32..=4,
        ops in prop::collection::vec(arb_gate_op(8), 1..=20),
    ) {
        let mut circuit = Circuit::new("prop");
        circuit.add_qreg("q", size);

        let mut accepted = vec![];
        for op in &ops {
            let qubits = op.qubits();
            let result = circuit.gate(op.gate(), qubits.clone());
            let in_range = qubits.iter().all(|q| q.0 < size);
            let distinct = qubits.len() < 2 || qubits[0] != qubits[1];

            match result {
                Ok(_) => {
                    prop_assert!(in_range && distinct);
                    accepted.push(qubits);
                }
                Err(IrError::QubitNotFound { .. }) => prop_assert!(!in_range),
                Err(IrError::DuplicateQubit { .. }) => prop_assert!(in_range && !distinct),
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        let recorded: Vec<Vec<QubitId>> = circuit
            .instructions()
            .iter()
            .map(|inst| inst.qubits.clone())
            .collect();
        prop_assert_eq!(recorded, accepted);
    }
}

#[test]
fn circuit_serializes_with_registers() {
    let mut circuit = Circuit::new("serde");
    let control = circuit.add_qreg("control", 2);
    circuit.h(control[0]).unwrap();
    circuit.czpow(0.5, control[0], control[1]).unwrap();
    circuit.measure_register(&control).unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    assert!(json.contains("\"control\""));
    assert!(json.contains("CZPow"));

    let decoded: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, circuit);
}
