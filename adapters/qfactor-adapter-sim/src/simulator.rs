//! Simulator implementation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, instrument};

use qfactor_hal::{Capabilities, HalResult, MeasurementResult, Simulator};
use qfactor_ir::{Circuit, InstructionKind, QubitId};

use crate::statevector::{Statevector, outcome_bits};

/// Default qubit limit (2^20 amplitudes, 16 MiB).
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local state-vector simulator.
///
/// When every measurement is terminal the state is evolved once and the
/// final distribution is sampled per repetition. Otherwise each repetition
/// is simulated from scratch, collapsing the state at every measurement.
pub struct StatevectorSimulator {
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Fixed RNG seed; `None` draws from OS entropy on every run.
    seed: Option<u64>,
}

impl StatevectorSimulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            seed: None,
        }
    }

    /// Use a fixed RNG seed so that runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a fixed RNG seed when one is given.
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Evolve once, then sample the final distribution per repetition.
    fn run_terminal(&self, circuit: &Circuit, repetitions: u32, rng: &mut StdRng) -> MeasurementResult {
        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions().iter().filter(|i| i.is_gate()) {
            sv.apply(inst);
        }

        let measurements: Vec<(&str, Vec<usize>)> = circuit
            .instructions()
            .iter()
            .filter_map(|inst| {
                inst.measurement_key()
                    .map(|key| (key, inst.qubits.iter().map(|q| q.index()).collect()))
            })
            .collect();

        let mut result = MeasurementResult::new(repetitions);
        for _ in 0..repetitions {
            let outcome = sv.sample(rng);
            for (key, qubits) in &measurements {
                result.push(*key, outcome_bits(outcome, qubits));
            }
        }
        result
    }

    /// Simulate each repetition separately with collapse at measurements.
    fn run_per_shot(&self, circuit: &Circuit, repetitions: u32, rng: &mut StdRng) -> MeasurementResult {
        let mut result = MeasurementResult::new(repetitions);
        for shot in 0..repetitions {
            let mut sv = Statevector::new(circuit.num_qubits());
            for inst in circuit.instructions() {
                match &inst.kind {
                    InstructionKind::Gate(_) => sv.apply(inst),
                    InstructionKind::Measure { key } => {
                        let qubits: Vec<usize> = inst.qubits.iter().map(|q| q.index()).collect();
                        result.push(key.as_str(), sv.measure(&qubits, rng));
                    }
                }
            }

            if shot > 0 && shot % 1000 == 0 {
                debug!("Completed {} shots", shot);
            }
        }
        result
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// True when no gate acts on a qubit after that qubit has been measured.
pub(crate) fn measurements_are_terminal(circuit: &Circuit) -> bool {
    let mut measured: FxHashSet<QubitId> = FxHashSet::default();
    for inst in circuit.instructions() {
        if inst.is_measure() {
            measured.extend(inst.qubits.iter().copied());
        } else if inst.qubits.iter().any(|q| measured.contains(q)) {
            return false;
        }
    }
    true
}

impl Simulator for StatevectorSimulator {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name(), qubits = circuit.num_qubits()))]
    fn run(&self, circuit: &Circuit, repetitions: u32) -> HalResult<MeasurementResult> {
        self.validate(circuit, repetitions)?;

        let start = Instant::now();
        let mut rng = self.rng();

        let terminal = measurements_are_terminal(circuit);
        debug!(
            ops = circuit.num_ops(),
            repetitions, terminal, "Starting simulation"
        );

        let result = if terminal {
            self.run_terminal(circuit, repetitions, &mut rng)
        } else {
            self.run_per_shot(circuit, repetitions, &mut rng)
        };

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(result.with_execution_time(elapsed.as_millis() as u64))
    }
}
