//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur while running a circuit on a simulator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Invalid circuit.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds simulator capabilities.
    #[error("Circuit exceeds simulator capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of repetitions.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Generic simulator error.
    #[error("Simulator error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
