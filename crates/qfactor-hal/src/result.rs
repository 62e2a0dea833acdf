//! Measurement results.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Interpret a bit sequence as an unsigned big-endian integer.
///
/// The first bit is the most significant. Sequences must fit in 64 bits;
/// use [`checked_big_endian_value`] when the width is not known.
pub fn big_endian_value(bits: &[bool]) -> u64 {
    debug_assert!(bits.len() <= 64, "{} bits do not fit in u64", bits.len());
    bits.iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Like [`big_endian_value`], but `None` for sequences wider than 64 bits.
pub fn checked_big_endian_value(bits: &[bool]) -> Option<u64> {
    (bits.len() <= 64).then(|| big_endian_value(bits))
}

/// Sampled outcomes of every measurement in a circuit.
///
/// For each measurement key the result holds one bit sequence per
/// repetition. Bits appear in the order the qubits were listed in the
/// measurement instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementResult {
    repetitions: u32,
    records: FxHashMap<String, Vec<Vec<bool>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_time_ms: Option<u64>,
}

impl MeasurementResult {
    /// Create an empty result for `repetitions` runs.
    pub fn new(repetitions: u32) -> Self {
        Self {
            repetitions,
            records: FxHashMap::default(),
            execution_time_ms: None,
        }
    }

    /// Set the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }

    /// Append one repetition's bits for `key`.
    pub fn push(&mut self, key: impl Into<String>, bits: Vec<bool>) {
        self.records.entry(key.into()).or_default().push(bits);
    }

    /// Number of repetitions requested.
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Wall-clock time of the run, if recorded.
    pub fn execution_time_ms(&self) -> Option<u64> {
        self.execution_time_ms
    }

    /// Measurement keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All repetitions recorded for `key`.
    pub fn records(&self, key: &str) -> Option<&[Vec<bool>]> {
        self.records.get(key).map(Vec::as_slice)
    }

    /// Bits of repetition `rep` for `key`.
    pub fn bits(&self, key: &str, rep: usize) -> Option<&[bool]> {
        self.records.get(key)?.get(rep).map(Vec::as_slice)
    }

    /// Big-endian value of repetition `rep` for `key`.
    pub fn value(&self, key: &str, rep: usize) -> Option<u64> {
        self.bits(key, rep).map(big_endian_value)
    }

    /// Count of each big-endian value observed for `key`.
    pub fn histogram(&self, key: &str) -> FxHashMap<u64, u32> {
        let mut histogram = FxHashMap::default();
        for bits in self.records.get(key).into_iter().flatten() {
            *histogram.entry(big_endian_value(bits)).or_insert(0) += 1;
        }
        histogram
    }
}

impl fmt::Display for MeasurementResult {
    /// One line per key; each comma-separated row lists one qubit's bits
    /// across all repetitions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let reps = &self.records[key];
            let width = reps.first().map_or(0, Vec::len);
            let rows: Vec<String> = (0..width)
                .map(|q| {
                    reps.iter()
                        .map(|bits| if bits.get(q).copied().unwrap_or(false) { '1' } else { '0' })
                        .collect()
                })
                .collect();
            write!(f, "{key}={}", rows.join(", "))?;
        }
        Ok(())
    }
}
