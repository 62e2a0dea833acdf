//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Gates the period-finding circuits are built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Hadamard gate.
    H,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-phase gate raised to an exponent: `CZ^t`.
    ///
    /// Multiplies the `|11⟩` amplitude by `e^{iπt}`; `t = 1` is a plain CZ.
    CZPow(f64),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::CX => "cx",
            StandardGate::CZPow(_) => "czpow",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X | StandardGate::H => 1,
            StandardGate::CX | StandardGate::CZPow(_) => 2,
        }
    }

    /// The exponent of a controlled-phase gate.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            StandardGate::CZPow(t) => Some(*t),
            _ => None,
        }
    }

    /// Diagram symbols, one per operand.
    pub fn symbols(&self) -> Vec<String> {
        match self {
            StandardGate::X => vec!["X".into()],
            StandardGate::H => vec!["H".into()],
            StandardGate::CX => vec!["@".into(), "X".into()],
            StandardGate::CZPow(t) => vec!["@".into(), format!("@^{t}")],
        }
    }
}
