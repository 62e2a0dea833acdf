//! qfactor Circuit Intermediate Representation
//!
//! This crate provides the data structures for describing the quantum
//! circuits that the rest of qfactor builds, simulates and reports on.
//!
//! # Core Components
//!
//! - **Qubits and Registers**: [`QubitId`], [`Qubit`] and [`QuantumRegister`]
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, `CZ^t`)
//! - **Instructions**: [`Instruction`] combining a gate or keyed measurement
//!   with its operands
//! - **Circuit**: [`Circuit`], an ordered, validated instruction list with a
//!   text diagram via [`std::fmt::Display`]
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qfactor_ir::Circuit;
//!
//! let mut circuit = Circuit::new("bell_state");
//! let q = circuit.add_qreg("q", 2);
//!
//! circuit.h(q[0]).unwrap();
//! circuit.cx(q[0], q[1]).unwrap();
//! circuit.measure_register(&q).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X gate |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZPow` | 2 | Controlled phase `CZ^t` |

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{QuantumRegister, Qubit, QubitId};
