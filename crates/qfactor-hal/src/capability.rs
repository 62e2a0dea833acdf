//! Simulator capabilities.

use serde::{Deserialize, Serialize};

/// Static description of what a simulator can run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Simulator name.
    pub name: String,
    /// Maximum number of qubits.
    pub num_qubits: u32,
    /// Maximum repetitions per run.
    pub max_shots: u32,
    /// Names of the gates the simulator applies.
    pub gate_set: Vec<String>,
    /// Additional features (e.g. "statevector", "mid-circuit-measurement").
    pub features: Vec<String>,
}

impl Capabilities {
    /// Capabilities of a local state-vector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "statevector".into(),
            num_qubits,
            max_shots: 1_000_000,
            gate_set: ["x", "h", "cx", "czpow"].map(String::from).to_vec(),
            features: vec!["statevector".into(), "mid-circuit-measurement".into()],
        }
    }

    /// Check whether a gate name is supported.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.gate_set.iter().any(|g| g == name)
    }
}
