//! High-level circuit builder API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{QuantumRegister, Qubit, QubitId};

/// A quantum circuit.
///
/// Instructions are kept in the order they were appended and are executed
/// in that order. Every operand must belong to a register declared on the
/// circuit; this is checked when the instruction is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit, indexed by id.
    qubits: Vec<Qubit>,
    /// Declared registers, in allocation order.
    registers: Vec<QuantumRegister>,
    /// Instructions in execution order.
    instructions: Vec<Instruction>,
    /// Counter for generating qubit IDs.
    next_qubit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            registers: vec![],
            instructions: vec![],
            next_qubit_id: 0,
        }
    }

    /// Add a quantum register with `size` fresh qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> QuantumRegister {
        let name = name.into();
        let mut ids = Vec::with_capacity(size as usize);
        for i in 0..size {
            let id = QubitId(self.next_qubit_id);
            self.next_qubit_id += 1;
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        let register = QuantumRegister::new(name, ids);
        self.registers.push(register.clone());
        register
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = || Some(instruction.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        if let InstructionKind::Measure { key } = &instruction.kind {
            if instruction.qubits.is_empty() {
                return Err(IrError::EmptyMeasurement(key.clone()));
            }
            if self.measurement_keys().any(|k| k == key.as_str()) {
                return Err(IrError::DuplicateMeasurementKey(key.clone()));
            }
        }

        for (pos, &qubit) in instruction.qubits.iter().enumerate() {
            if !self.contains_qubit(qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name(),
                });
            }
            if instruction.qubits[..pos].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name(),
                });
            }
        }

        Ok(())
    }

    fn contains_qubit(&self, qubit: QubitId) -> bool {
        qubit.index() < self.qubits.len()
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply controlled-phase gate `CZ^exponent`.
    pub fn czpow(&mut self, exponent: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CZPow(exponent),
            control,
            target,
        ))
    }

    /// Apply an arbitrary standard gate.
    pub fn gate(
        &mut self,
        gate: StandardGate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure `qubits` and record the outcome under `key`.
    pub fn measure(
        &mut self,
        key: impl Into<String>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(key, qubits))
    }

    /// Measure every qubit of `register`, keyed by the register name.
    pub fn measure_register(&mut self, register: &QuantumRegister) -> IrResult<&mut Self> {
        self.measure(register.name(), register.qubits().iter().copied())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Declared registers in allocation order.
    pub fn registers(&self) -> &[QuantumRegister] {
        &self.registers
    }

    /// Look up a register by name.
    pub fn register(&self, name: &str) -> Option<&QuantumRegister> {
        self.registers.iter().find(|r| r.name() == name)
    }

    /// Instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Instruction counts keyed by name.
    pub fn count_ops(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Keys of all measurements, in circuit order.
    pub fn measurement_keys(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(Instruction::measurement_key)
    }

    /// Get the circuit depth.
    ///
    /// Instructions on disjoint qubits share a layer.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.qubits.len()];
        let mut depth = 0;
        for inst in &self.instructions {
            let layer = inst
                .qubits
                .iter()
                .map(|q| levels[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                levels[q.index()] = layer;
            }
            depth = depth.max(layer);
        }
        depth
    }
}
