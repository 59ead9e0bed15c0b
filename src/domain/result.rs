// ============================================================
// Layer 3 — FactorizationResult
// ============================================================
// Everything one call to the factorizer produces:
//
//   number         — the input n
//   pairs          — every (a, n / a) with 2 ≤ a ≤ ⌊√n⌋, ascending
//   elapsed        — wall-clock time of the divisor scan
//   classification — derived from pairs.len()
//
// Created once, never mutated. The caller owns it and may keep
// it around for redisplay or hand it to a cache.

use std::time::Duration;

use crate::domain::{classification::Classification, factor_pair::FactorPair};
use crate::math::isqrt::isqrt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorizationResult {
    number:         u64,
    pairs:          Vec<FactorPair>,
    elapsed:        Duration,
    classification: Classification,
}

impl FactorizationResult {
    /// Build a result for a valid input; the classification is
    /// derived from the pair count so the two can never disagree.
    pub fn new(number: u64, pairs: Vec<FactorPair>, elapsed: Duration) -> Self {
        let classification = Classification::from_pair_count(pairs.len());
        Self { number, pairs, elapsed, classification }
    }

    /// Result for an input below 2: no pairs, classified Invalid
    pub fn invalid(number: u64, elapsed: Duration) -> Self {
        Self {
            number,
            pairs: Vec::new(),
            elapsed,
            classification: Classification::Invalid,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn pairs(&self) -> &[FactorPair] {
        &self.pairs
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Elapsed time in milliseconds, for display
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Number of decimal digits in the input
    pub fn digit_count(&self) -> usize {
        self.number.to_string().len()
    }

    /// ⌊√n⌋, the last candidate divisor the scan tested
    pub fn search_limit(&self) -> u64 {
        isqrt(self.number)
    }

    /// How many candidates were tested (2..=⌊√n⌋)
    pub fn search_space(&self) -> u64 {
        self.search_limit().saturating_sub(1)
    }
}
