//! qfactor Local Statevector Simulator
//!
//! This crate provides the local simulator used by the qfactor pipeline. It
//! keeps the full statevector, so results are exact up to sampling noise,
//! and is limited to ~20-25 qubits.
//!
//! # Features
//!
//! - **Exact evolution**: full statevector representation
//! - **All IR gates**: every [`qfactor_ir::StandardGate`] is applied
//! - **Keyed sampling**: one bit sequence per measurement key and repetition
//! - **Mid-circuit measurement**: projective collapse when a measured qubit
//!   is used again
//! - **Reproducible runs**: optional fixed RNG seed
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 6 | ~1 KB | Instant |
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! # Example
//!
//! ```rust
//! use qfactor_adapter_sim::StatevectorSimulator;
//! use qfactor_hal::Simulator;
//! use qfactor_ir::Circuit;
//!
//! let mut circuit = Circuit::new("bell");
//! let q = circuit.add_qreg("q", 2);
//! circuit.h(q[0]).unwrap().cx(q[0], q[1]).unwrap();
//! circuit.measure_register(&q).unwrap();
//!
//! let sim = StatevectorSimulator::new().with_seed(1);
//! let result = sim.run(&circuit, 100).unwrap();
//!
//! // Only |00⟩ and |11⟩ are ever observed.
//! for rep in 0..100 {
//!     let bits = result.bits("q", rep).unwrap();
//!     assert_eq!(bits[0], bits[1]);
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::StatevectorSimulator;
pub use statevector::Statevector;
