//! Period-finding circuit construction.
//!
//! The circuit has a fixed topology over two registers:
//!
//! ```text
//!   control ──H──●────── inverse-QFT-like ladder ──M('control')
//!                │
//!   target  ─────X─────────────────────────────────M('target')
//! ```
//!
//! 1. Hadamard on every control qubit.
//! 2. CX from control `i` to target `i` (stand-in for modular
//!    exponentiation; not equivalent to it).
//! 3. For each control qubit `i`: H, then `CZ^(1/2^(i+1))` onto qubit `i+1`.
//! 4. Measure control, then target.

use qfactor_ir::Circuit;
use tracing::debug;

use crate::error::{ShorError, ShorResult};

/// Measurement key of the control register.
pub const CONTROL_KEY: &str = "control";

/// Measurement key of the target register.
pub const TARGET_KEY: &str = "target";

/// Register size used when none is configured.
pub const DEFAULT_REGISTER_SIZE: u32 = 3;

/// Exponent of the controlled-phase gate at ladder step `step` (1-based).
///
/// Step 1 is `1/2`, step 2 is `1/4`, halving per step.
pub fn phase_exponent(step: u32) -> f64 {
    0.5_f64.powi(step as i32)
}

/// Builds the control/target period-finding circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBuilder {
    control_size: u32,
    target_size: u32,
}

impl CircuitBuilder {
    /// Create a builder for the given register sizes.
    pub fn new(control_size: u32, target_size: u32) -> Self {
        Self {
            control_size,
            target_size,
        }
    }

    /// Number of control qubits.
    pub fn control_size(&self) -> u32 {
        self.control_size
    }

    /// Number of target qubits.
    pub fn target_size(&self) -> u32 {
        self.target_size
    }

    /// Build the circuit.
    ///
    /// Both sizes must be positive. When the sizes differ only the first
    /// `min(control, target)` pairs receive a CX.
    pub fn build(&self) -> ShorResult<Circuit> {
        if self.control_size == 0 || self.target_size == 0 {
            return Err(ShorError::InvalidInput(format!(
                "register sizes must be positive (control {}, target {})",
                self.control_size, self.target_size
            )));
        }

        let mut circuit = Circuit::new("period_finding");
        let control = circuit.add_qreg(CONTROL_KEY, self.control_size);
        let target = circuit.add_qreg(TARGET_KEY, self.target_size);

        for &q in control.qubits() {
            circuit.h(q)?;
        }

        for (&c, &t) in control.qubits().iter().zip(target.qubits()) {
            circuit.cx(c, t)?;
        }

        let k = control.len();
        for i in 0..k {
            circuit.h(control[i])?;
            if i + 1 < k {
                circuit.czpow(phase_exponent(i as u32 + 1), control[i], control[i + 1])?;
            }
        }

        circuit.measure_register(&control)?;
        circuit.measure_register(&target)?;

        debug!(
            control = self.control_size,
            target = self.target_size,
            ops = circuit.num_ops(),
            depth = circuit.depth(),
            "built period-finding circuit"
        );
        Ok(circuit)
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTER_SIZE, DEFAULT_REGISTER_SIZE)
    }
}
