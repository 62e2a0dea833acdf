//! qfactor Simulator Abstraction Layer
//!
//! This crate defines the boundary between the circuits qfactor builds and
//! the simulators that sample them:
//!
//! - the [`Simulator`] trait (run a circuit for a number of repetitions)
//! - [`Capabilities`] describing simulator limits
//! - [`MeasurementResult`], the per-key, per-repetition bit records a run
//!   produces
//!
//! # Implementations
//!
//! | Simulator | Crate |
//! |-----------|-------|
//! | Local state vector | `qfactor-adapter-sim` |

pub mod capability;
pub mod error;
pub mod result;
pub mod simulator;

pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use result::{MeasurementResult, big_endian_value, checked_big_endian_value};
pub use simulator::Simulator;
