//! Simulated Shor-style factorization.
//!
//! The pipeline has four stages:
//!
//! ```text
//!   CircuitBuilder ──→ Simulator ──→ PeriodExtractor ──→ find_factors
//!   (control/target)   (sampling)    (|control-target|)  (gcd(N, 2^(r/2)-1))
//! ```
//!
//! The circuit is a fixed toy: it does not depend on `N`, and its
//! controlled-NOT layer stands in for modular exponentiation without
//! computing it. Results are illustrative only.
//!
//! # Example
//!
//! ```rust
//! use qfactor_shor::{find_factors, FactorPair};
//!
//! let pair = find_factors(15, 4).unwrap();
//! assert_eq!(pair, FactorPair { factor1: 3, factor2: 5 });
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod factor;
pub mod period;
pub mod pipeline;

pub use builder::{CONTROL_KEY, CircuitBuilder, DEFAULT_REGISTER_SIZE, TARGET_KEY, phase_exponent};
pub use config::{DEFAULT_REPETITIONS, ShorConfig};
pub use error::{ShorError, ShorResult};
pub use factor::{FactorMode, FactorPair, find_factors, find_factors_with, gcd, mod_pow};
pub use period::{PeriodExtractor, PeriodStrategy, extract_period};
pub use pipeline::{ShorPipeline, ShorReport};
