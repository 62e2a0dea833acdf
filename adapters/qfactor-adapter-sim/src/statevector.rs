//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use qfactor_ir::{Instruction, InstructionKind, StandardGate};

/// A statevector representing a quantum state.
///
/// Qubit `q` corresponds to bit `q` of the basis-state index.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Apply a gate instruction. Measurements are handled by the caller.
    pub fn apply(&mut self, instruction: &Instruction) {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
            self.apply_gate(gate, &qubits);
        }
    }

    /// Apply a standard gate to specific qubits.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CZPow(t) => self.apply_cp(qubits[0], qubits[1], PI * t),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Sample a basis state without disturbing the state.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Rounding can leave the cumulative sum just below 1.0; fall back
        // to the last state with non-zero weight.
        self.amplitudes
            .iter()
            .rposition(|a| a.norm_sqr() > 0.0)
            .unwrap_or(0)
    }

    /// Measure `qubits`, collapse the state onto the outcome and return the
    /// bits in the order the qubits were given.
    pub fn measure<R: Rng + ?Sized>(&mut self, qubits: &[usize], rng: &mut R) -> Vec<bool> {
        let outcome = self.sample(rng);
        let bits = outcome_bits(outcome, qubits);

        let mut norm_sq = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let consistent = qubits
                .iter()
                .zip(&bits)
                .all(|(&q, &bit)| ((i >> q) & 1 == 1) == bit);
            if consistent {
                norm_sq += amp.norm_sqr();
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }

        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }

        bits
    }
}

/// Extract the bits of `qubits` from a basis-state index.
pub fn outcome_bits(outcome: usize, qubits: &[usize]) -> Vec<bool> {
    qubits.iter().map(|&q| (outcome >> q) & 1 == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_then_cx_through_instructions() {
        use qfactor_ir::QubitId;

        let mut sv = Statevector::new(2);
        sv.apply(&Instruction::single_qubit_gate(StandardGate::X, QubitId(0)));
        assert!(approx_eq(sv.amplitudes[0b01], Complex64::new(1.0, 0.0)));

        sv.apply(&Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1)));
        assert!(approx_eq(sv.amplitudes[0b01], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[0b11], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_czpow_phase() {
        let mut sv = Statevector::new(2);
        sv.apply_x(0);
        sv.apply_x(1);
        sv.apply_gate(&StandardGate::CZPow(0.5), &[0, 1]);
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 1.0)));

        sv.apply_gate(&StandardGate::CZPow(0.5), &[0, 1]);
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_czpow_leaves_other_states() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_h(1);
        let before = sv.amplitudes.clone();
        sv.apply_gate(&StandardGate::CZPow(0.25), &[0, 1]);
        for i in 0..3 {
            assert!(approx_eq(sv.amplitudes[i], before[i]));
        }
        assert!(approx_eq(
            sv.amplitudes[3],
            before[3] * Complex64::from_polar(1.0, PI / 4.0)
        ));
    }

    #[test]
    fn test_hadamard_twice_is_identity() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        sv.apply_h(0);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_sample_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sv = Statevector::new(1);
        sv.apply_x(0);

        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_measure_collapses_partner() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut sv = Statevector::new(2);
            sv.apply_h(0);
            sv.apply_cx(0, 1);

            let first = sv.measure(&[0], &mut rng);
            let second = sv.measure(&[1], &mut rng);
            assert_eq!(first, second);

            let total: f64 = sv.probabilities().iter().sum();
            assert!((total - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_outcome_bits_order() {
        // index 0b110: q0 = 0, q1 = 1, q2 = 1
        assert_eq!(outcome_bits(0b110, &[0, 1, 2]), vec![false, true, true]);
        assert_eq!(outcome_bits(0b110, &[2, 1, 0]), vec![true, true, false]);
    }
}
