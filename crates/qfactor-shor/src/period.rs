//! Period extraction from control/target measurement records.

use qfactor_hal::{MeasurementResult, checked_big_endian_value};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::{CONTROL_KEY, TARGET_KEY};
use crate::error::{ShorError, ShorResult};

/// Which repetitions contribute to the period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodStrategy {
    /// Use repetition 0 only.
    #[default]
    FirstShot,
    /// Use the most frequent per-repetition period; ties go to the smaller.
    MostFrequent,
}

/// Turns a [`MeasurementResult`] into a period.
///
/// The period of one repetition is `|control - target|`, each register read
/// as an unsigned big-endian integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodExtractor {
    strategy: PeriodStrategy,
}

impl PeriodExtractor {
    /// Create an extractor using `strategy`.
    pub fn new(strategy: PeriodStrategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> PeriodStrategy {
        self.strategy
    }

    /// Extract the period from `result`.
    ///
    /// Fails with [`ShorError::MissingMeasurement`] when either key is
    /// absent or has no repetitions, and with [`ShorError::InvalidInput`]
    /// when a contributing record is wider than 64 bits.
    pub fn extract(&self, result: &MeasurementResult) -> ShorResult<u64> {
        let control = records(result, CONTROL_KEY)?;
        let target = records(result, TARGET_KEY)?;

        let period = match self.strategy {
            PeriodStrategy::FirstShot => shot_period(&control[0], &target[0])?,
            PeriodStrategy::MostFrequent => {
                let mut counts: FxHashMap<u64, u32> = FxHashMap::default();
                for (c, t) in control.iter().zip(target) {
                    *counts.entry(shot_period(c, t)?).or_insert(0) += 1;
                }
                counts
                    .into_iter()
                    .max_by(|(pa, ca), (pb, cb)| ca.cmp(cb).then(pb.cmp(pa)))
                    .map_or(0, |(period, _)| period)
            }
        };

        debug!(period, strategy = ?self.strategy, "extracted period");
        Ok(period)
    }
}

/// Period of repetition 0, the default extraction.
pub fn extract_period(result: &MeasurementResult) -> ShorResult<u64> {
    PeriodExtractor::default().extract(result)
}

fn records<'a>(result: &'a MeasurementResult, key: &str) -> ShorResult<&'a [Vec<bool>]> {
    match result.records(key) {
        Some(reps) if !reps.is_empty() => Ok(reps),
        _ => Err(ShorError::MissingMeasurement(key.to_string())),
    }
}

fn shot_period(control: &[bool], target: &[bool]) -> ShorResult<u64> {
    Ok(register_value(control, CONTROL_KEY)?.abs_diff(register_value(target, TARGET_KEY)?))
}

fn register_value(bits: &[bool], key: &str) -> ShorResult<u64> {
    checked_big_endian_value(bits).ok_or_else(|| {
        ShorError::InvalidInput(format!(
            "'{key}' record has {} bits, at most 64 are supported",
            bits.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: u64, width: usize) -> Vec<bool> {
        (0..width).rev().map(|i| value >> i & 1 == 1).collect()
    }

    fn result(shots: &[(u64, u64)]) -> MeasurementResult {
        let mut result = MeasurementResult::new(shots.len() as u32);
        for &(c, t) in shots {
            result.push(CONTROL_KEY, bits(c, 3));
            result.push(TARGET_KEY, bits(t, 3));
        }
        result
    }

    #[test]
    fn test_first_shot_difference() {
        // control 101 = 5, target 001 = 1
        let r = result(&[(5, 1), (7, 0)]);
        assert_eq!(extract_period(&r).unwrap(), 4);
    }

    #[test]
    fn test_difference_is_absolute() {
        assert_eq!(extract_period(&result(&[(1, 6)])).unwrap(), 5);
        assert_eq!(extract_period(&result(&[(3, 3)])).unwrap(), 0);
    }

    #[test]
    fn test_big_endian_reading() {
        let mut r = MeasurementResult::new(1);
        r.push(CONTROL_KEY, vec![true, false, false]);
        r.push(TARGET_KEY, vec![false, false, true]);
        assert_eq!(extract_period(&r).unwrap(), 3);
    }

    #[test]
    fn test_most_frequent() {
        let r = result(&[(5, 1), (6, 0), (6, 0), (7, 1), (2, 0)]);
        let extractor = PeriodExtractor::new(PeriodStrategy::MostFrequent);
        assert_eq!(extractor.extract(&r).unwrap(), 6);
    }

    #[test]
    fn test_most_frequent_tie_prefers_smaller() {
        let r = result(&[(6, 0), (4, 0), (6, 0), (4, 0)]);
        let extractor = PeriodExtractor::new(PeriodStrategy::MostFrequent);
        assert_eq!(extractor.extract(&r).unwrap(), 4);
    }

    #[test]
    fn test_records_wider_than_u64_rejected() {
        let mut r = MeasurementResult::new(1);
        r.push(CONTROL_KEY, vec![true; 65]);
        r.push(TARGET_KEY, vec![false; 3]);
        assert!(matches!(
            extract_period(&r),
            Err(ShorError::InvalidInput(msg)) if msg.contains("'control'") && msg.contains("65")
        ));

        let mut r = MeasurementResult::new(2);
        r.push(CONTROL_KEY, bits(1, 3));
        r.push(TARGET_KEY, bits(0, 3));
        r.push(CONTROL_KEY, bits(1, 3));
        r.push(TARGET_KEY, vec![true; 70]);
        let extractor = PeriodExtractor::new(PeriodStrategy::MostFrequent);
        assert!(matches!(extractor.extract(&r), Err(ShorError::InvalidInput(_))));
        // Repetition 1 does not contribute to the first-shot period.
        assert_eq!(extract_period(&r).unwrap(), 1);
    }

    #[test]
    fn test_full_width_records_accepted() {
        let mut r = MeasurementResult::new(1);
        r.push(CONTROL_KEY, vec![true; 64]);
        r.push(TARGET_KEY, vec![false; 64]);
        assert_eq!(extract_period(&r).unwrap(), u64::MAX);
    }

    #[test]
    fn test_missing_measurement() {
        let mut r = MeasurementResult::new(1);
        r.push(CONTROL_KEY, vec![true]);
        assert!(matches!(
            extract_period(&r),
            Err(ShorError::MissingMeasurement(key)) if key == TARGET_KEY
        ));
        assert!(matches!(
            extract_period(&MeasurementResult::new(0)),
            Err(ShorError::MissingMeasurement(_))
        ));
    }
}
