//! Classical post-processing: period to factor pair.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ShorError, ShorResult};

/// How strictly a recovered pair is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorMode {
    /// Return whatever `gcd` yields, trivial pairs included.
    #[default]
    Lenient,
    /// Require `factor1 * factor2 == n` with neither factor equal to 1 or `n`.
    Strict,
}

/// Two integers recovered from a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorPair {
    /// `gcd(n, 2^(period/2) - 1)`.
    pub factor1: u64,
    /// `n / factor1`.
    pub factor2: u64,
}

impl FactorPair {
    /// True when neither factor is 1 and their product is `n`.
    pub fn is_nontrivial(&self, n: u64) -> bool {
        self.factor1 > 1
            && self.factor2 > 1
            && u128::from(self.factor1) * u128::from(self.factor2) == u128::from(n)
    }
}

impl fmt::Display for FactorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.factor1, self.factor2)
    }
}

/// Recover a factor pair of `n` from `period` in lenient mode.
pub fn find_factors(n: u64, period: u64) -> ShorResult<FactorPair> {
    find_factors_with(n, period, FactorMode::Lenient)
}

/// Recover a factor pair of `n` from `period`.
///
/// Zero and odd periods yield [`ShorError::NoPeriodFound`].
pub fn find_factors_with(n: u64, period: u64, mode: FactorMode) -> ShorResult<FactorPair> {
    if n <= 1 {
        return Err(ShorError::InvalidInput(format!(
            "N must be greater than 1, got {n}"
        )));
    }
    if period == 0 || period % 2 != 0 {
        return Err(ShorError::NoPeriodFound { period });
    }

    // 2^(period/2) - 1, reduced mod n.
    let x = mod_pow(2, period / 2, n);
    let y = if x == 0 { n - 1 } else { x - 1 };

    let factor1 = gcd(n, y);
    if factor1 == 0 {
        return Err(ShorError::InvalidInput(format!(
            "gcd({n}, {y}) is zero"
        )));
    }
    let pair = FactorPair {
        factor1,
        factor2: n / factor1,
    };
    debug!(n, period, factor1 = pair.factor1, factor2 = pair.factor2, "recovered factors");

    if mode == FactorMode::Strict && !pair.is_nontrivial(n) {
        return Err(ShorError::TrivialFactors {
            n,
            factor1: pair.factor1,
            factor2: pair.factor2,
        });
    }
    Ok(pair)
}

/// Modular exponentiation: `base^exp mod m` by repeated squaring.
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let m = u128::from(m);
    let mut result = 1u128;
    let mut b = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        exp >>= 1;
        b = b * b % m;
    }
    result as u64
}

/// Greatest common divisor; `gcd(a, 0) == a`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_of_15() {
        let pair = find_factors(15, 4).unwrap();
        assert_eq!(pair, FactorPair { factor1: 3, factor2: 5 });
        assert_eq!(pair.to_string(), "3 and 5");
        assert!(pair.is_nontrivial(15));
    }

    #[test]
    fn test_other_even_periods() {
        // 2^1 - 1 = 1
        assert_eq!(find_factors(15, 2).unwrap(), FactorPair { factor1: 1, factor2: 15 });
        // 2^3 - 1 = 7
        assert_eq!(find_factors(15, 6).unwrap(), FactorPair { factor1: 1, factor2: 15 });
        // 2^4 - 1 = 15
        assert_eq!(find_factors(15, 8).unwrap(), FactorPair { factor1: 15, factor2: 1 });
        assert_eq!(find_factors(21, 6).unwrap(), FactorPair { factor1: 7, factor2: 3 });
    }

    #[test]
    fn test_unusable_periods() {
        assert!(matches!(
            find_factors(15, 3),
            Err(ShorError::NoPeriodFound { period: 3 })
        ));
        assert!(matches!(
            find_factors(15, 0),
            Err(ShorError::NoPeriodFound { period: 0 })
        ));
    }

    #[test]
    fn test_invalid_n() {
        assert!(matches!(find_factors(1, 4), Err(ShorError::InvalidInput(_))));
        assert!(matches!(find_factors(0, 4), Err(ShorError::InvalidInput(_))));
    }

    #[test]
    fn test_strict_mode() {
        assert!(matches!(
            find_factors_with(15, 2, FactorMode::Strict),
            Err(ShorError::TrivialFactors { n: 15, factor1: 1, factor2: 15 })
        ));
        assert!(matches!(
            find_factors_with(15, 8, FactorMode::Strict),
            Err(ShorError::TrivialFactors { n: 15, factor1: 15, factor2: 1 })
        ));
        assert!(find_factors_with(15, 4, FactorMode::Strict).is_ok());
    }

    #[test]
    fn test_large_period_no_overflow() {
        let pair = find_factors(u64::MAX, 128).unwrap();
        assert_eq!(u64::MAX % pair.factor1, 0);
        assert_eq!(pair.factor1 * pair.factor2, u64::MAX);
    }

    #[test]
    fn test_mod_pow_and_gcd() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(7, 0, 13), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
        assert_eq!(gcd(15, 0), 15);
        assert_eq!(gcd(15, 3), 3);
        assert_eq!(gcd(17, 5), 1);
    }
}
