//! Simulator trait.
//!
//! The [`Simulator`] trait is the single boundary between circuit
//! construction and sampling:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run()
//!    (sync, &ref)        (sync)       (sync)
//! ```
//!
//! Runs are synchronous and self-contained: the returned
//! [`MeasurementResult`] is complete, and nothing is retained between calls.

use qfactor_ir::Circuit;
use tracing::debug;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::MeasurementResult;

/// Trait for circuit samplers.
///
/// # Contract
///
/// - `capabilities()` MUST be infallible and cached at construction time.
/// - `run()` MUST reject `repetitions == 0` and circuits that exceed
///   `capabilities()`; the provided `validate()` performs both checks.
/// - `run()` MUST record exactly `repetitions` bit sequences under every
///   measurement key of the circuit.
pub trait Simulator: Send + Sync {
    /// Get the name of this simulator.
    fn name(&self) -> &str;

    /// Get the capabilities of this simulator.
    fn capabilities(&self) -> &Capabilities;

    /// Evolve `circuit` and sample its measurements `repetitions` times.
    fn run(&self, circuit: &Circuit, repetitions: u32) -> HalResult<MeasurementResult>;

    /// Check a circuit and repetition count against the capabilities.
    fn validate(&self, circuit: &Circuit, repetitions: u32) -> HalResult<()> {
        let caps = self.capabilities();

        if repetitions == 0 {
            return Err(HalError::InvalidShots(
                "at least one repetition is required".into(),
            ));
        }
        if repetitions > caps.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{repetitions} repetitions requested but {} allows at most {}",
                self.name(),
                caps.max_shots
            )));
        }
        if circuit.num_qubits() > caps.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but {} only supports {}",
                circuit.num_qubits(),
                self.name(),
                caps.num_qubits
            )));
        }
        if let Some(inst) = circuit
            .instructions()
            .iter()
            .find(|inst| inst.is_gate() && !caps.supports_gate(inst.name()))
        {
            return Err(HalError::InvalidCircuit(format!(
                "gate '{}' is not supported by {}",
                inst.name(),
                self.name()
            )));
        }

        debug!(
            qubits = circuit.num_qubits(),
            ops = circuit.num_ops(),
            repetitions,
            "circuit validated"
        );
        Ok(())
    }
}
