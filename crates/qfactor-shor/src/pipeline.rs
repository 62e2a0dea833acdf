//! End-to-end factoring run: build, simulate, extract, factor.

use qfactor_hal::{MeasurementResult, Simulator};
use qfactor_ir::Circuit;
use tracing::{debug, info, instrument};

use crate::builder::CircuitBuilder;
use crate::config::ShorConfig;
use crate::error::{ShorError, ShorResult};
use crate::factor::{FactorPair, find_factors_with};
use crate::period::PeriodExtractor;

/// Everything one run produced.
#[derive(Debug)]
pub struct ShorReport {
    /// The number being factored.
    pub n: u64,
    /// The circuit that was simulated.
    pub circuit: Circuit,
    /// Raw measurement records.
    pub result: MeasurementResult,
    /// Extracted period.
    pub period: u64,
    /// Recovered factors, or the recoverable reason there are none.
    pub outcome: ShorResult<FactorPair>,
}

impl ShorReport {
    /// The recovered pair, if any.
    pub fn factors(&self) -> Option<&FactorPair> {
        self.outcome.as_ref().ok()
    }
}

/// Runs the period-finding circuit on a [`Simulator`] and post-processes
/// the measurements.
pub struct ShorPipeline<S: Simulator> {
    simulator: S,
    config: ShorConfig,
}

impl<S: Simulator> ShorPipeline<S> {
    /// Create a pipeline over `simulator`.
    pub fn new(simulator: S, config: ShorConfig) -> Self {
        Self { simulator, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ShorConfig {
        &self.config
    }

    /// The simulator used for sampling.
    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Build the circuit this pipeline runs.
    pub fn circuit(&self) -> ShorResult<Circuit> {
        CircuitBuilder::new(self.config.control_size, self.config.target_size).build()
    }

    /// Attempt to factor `n`.
    ///
    /// Input, circuit and simulator failures are returned as `Err`. An
    /// unusable period or a trivial pair is stored in
    /// [`ShorReport::outcome`] instead.
    #[instrument(skip(self), fields(simulator = self.simulator.name(), repetitions = self.config.repetitions))]
    pub fn run(&self, n: u64) -> ShorResult<ShorReport> {
        if n <= 1 {
            return Err(ShorError::InvalidInput(format!(
                "N must be greater than 1, got {n}"
            )));
        }
        self.config.validate()?;

        let circuit = self.circuit()?;
        debug!(qubits = circuit.num_qubits(), ops = circuit.num_ops(), "circuit ready");

        let result = self.simulator.run(&circuit, self.config.repetitions)?;
        let period = PeriodExtractor::new(self.config.strategy).extract(&result)?;

        let outcome = match find_factors_with(n, period, self.config.factor_mode) {
            Err(e) if !e.is_recoverable() => return Err(e),
            outcome => outcome,
        };

        match &outcome {
            Ok(pair) => info!(n, period, %pair, "factors found"),
            Err(e) => info!(n, period, error = %e, "no factors"),
        }

        Ok(ShorReport {
            n,
            circuit,
            result,
            period,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::FactorMode;
    use crate::builder::{CONTROL_KEY, TARGET_KEY};
    use qfactor_hal::{Capabilities, HalResult};

    /// Replays fixed control/target values on every repetition.
    struct FixedSimulator {
        capabilities: Capabilities,
        control: Vec<bool>,
        target: Vec<bool>,
    }

    impl FixedSimulator {
        fn new(control: Vec<bool>, target: Vec<bool>) -> Self {
            Self {
                capabilities: Capabilities::simulator(20),
                control,
                target,
            }
        }
    }

    impl Simulator for FixedSimulator {
        fn name(&self) -> &str {
            "fixed"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        fn run(&self, circuit: &Circuit, repetitions: u32) -> HalResult<MeasurementResult> {
            self.validate(circuit, repetitions)?;
            let mut result = MeasurementResult::new(repetitions);
            for _ in 0..repetitions {
                result.push(CONTROL_KEY, self.control.clone());
                result.push(TARGET_KEY, self.target.clone());
            }
            Ok(result)
        }
    }

    #[test]
    fn test_period_four_factors_fifteen() {
        // 101 - 001 = 4
        let sim = FixedSimulator::new(vec![true, false, true], vec![false, false, true]);
        let report = ShorPipeline::new(sim, ShorConfig::default()).run(15).unwrap();
        assert_eq!(report.period, 4);
        assert_eq!(report.factors(), Some(&FactorPair { factor1: 3, factor2: 5 }));
        assert_eq!(report.result.repetitions(), 100);
    }

    #[test]
    fn test_odd_period_is_reported_not_fatal() {
        // 011 - 000 = 3
        let sim = FixedSimulator::new(vec![false, true, true], vec![false; 3]);
        let report = ShorPipeline::new(sim, ShorConfig::default()).run(15).unwrap();
        assert_eq!(report.period, 3);
        assert!(matches!(
            report.outcome,
            Err(ShorError::NoPeriodFound { period: 3 })
        ));
    }

    #[test]
    fn test_strict_trivial_pair_is_reported() {
        // 010 - 000 = 2, gcd(15, 1) = 1
        let sim = FixedSimulator::new(vec![false, true, false], vec![false; 3]);
        let config = ShorConfig {
            factor_mode: FactorMode::Strict,
            ..ShorConfig::default()
        };
        let report = ShorPipeline::new(sim, config).run(15).unwrap();
        assert!(matches!(report.outcome, Err(ShorError::TrivialFactors { .. })));
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        let sim = FixedSimulator::new(vec![false; 3], vec![false; 3]);
        let pipeline = ShorPipeline::new(sim, ShorConfig::default());
        assert!(matches!(pipeline.run(1), Err(ShorError::InvalidInput(_))));

        let sim = FixedSimulator::new(vec![false; 3], vec![false; 3]);
        let config = ShorConfig {
            repetitions: 0,
            ..ShorConfig::default()
        };
        assert!(matches!(
            ShorPipeline::new(sim, config).run(15),
            Err(ShorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_simulator_limits_propagate() {
        let mut sim = FixedSimulator::new(vec![false; 3], vec![false; 3]);
        sim.capabilities = Capabilities::simulator(4);
        let result = ShorPipeline::new(sim, ShorConfig::default()).run(15);
        assert!(matches!(result, Err(ShorError::Hal(_))));
    }
}
