//! Error types for period finding and factor recovery.

use thiserror::Error;

/// Errors produced by the factoring pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShorError {
    /// The extracted period is zero or odd, so `a^(r/2) - 1` is unusable.
    #[error("No usable period found (period {period} is zero or odd); try running again")]
    NoPeriodFound {
        /// The rejected period.
        period: u64,
    },

    /// Inputs outside the domain of the computation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Strict mode: the recovered pair does not split N non-trivially.
    #[error("Trivial factorization of {n}: {factor1} x {factor2}")]
    TrivialFactors {
        /// The number being factored.
        n: u64,
        /// First recovered factor.
        factor1: u64,
        /// Second recovered factor.
        factor2: u64,
    },

    /// A required measurement key is absent or has no repetitions.
    #[error("Measurement '{0}' is missing from the result")]
    MissingMeasurement(String),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qfactor_ir::IrError),

    /// Simulator returned an error.
    #[error("Simulator error: {0}")]
    Hal(#[from] qfactor_hal::HalError),
}

impl ShorError {
    /// True for failures that are reported to the user rather than aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShorError::NoPeriodFound { .. } | ShorError::TrivialFactors { .. }
        )
    }
}

/// Result type for factoring operations.
pub type ShorResult<T> = Result<T, ShorError>;
