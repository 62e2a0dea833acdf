//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_REGISTER_SIZE;
use crate::error::{ShorError, ShorResult};
use crate::factor::FactorMode;
use crate::period::PeriodStrategy;

/// Repetitions used when none are configured.
pub const DEFAULT_REPETITIONS: u32 = 100;

/// Settings for one factoring run.
///
/// Every field has a default, so partial YAML documents are accepted:
///
/// ```yaml
/// repetitions: 500
/// strategy: most-frequent
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShorConfig {
    /// Qubits in the control register.
    pub control_size: u32,
    /// Qubits in the target register.
    pub target_size: u32,
    /// Number of simulator repetitions.
    pub repetitions: u32,
    /// How the period is extracted.
    pub strategy: PeriodStrategy,
    /// How recovered factors are checked.
    pub factor_mode: FactorMode,
    /// Simulator RNG seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ShorConfig {
    /// Reject settings no run can use.
    pub fn validate(&self) -> ShorResult<()> {
        if self.repetitions == 0 {
            return Err(ShorError::InvalidInput(
                "repetitions must be at least 1".into(),
            ));
        }
        if self.control_size == 0 || self.target_size == 0 {
            return Err(ShorError::InvalidInput(format!(
                "register sizes must be positive (control {}, target {})",
                self.control_size, self.target_size
            )));
        }
        Ok(())
    }
}

impl Default for ShorConfig {
    fn default() -> Self {
        Self {
            control_size: DEFAULT_REGISTER_SIZE,
            target_size: DEFAULT_REGISTER_SIZE,
            repetitions: DEFAULT_REPETITIONS,
            strategy: PeriodStrategy::default(),
            factor_mode: FactorMode::default(),
            seed: None,
        }
    }
}
