// ============================================================
// Layer 5 — Factorizer
// ============================================================
// Trial division:
//
//   s = ⌊√n⌋
//   for i in 2..=s:
//       if n % i == 0 → push (i, n / i)
//
// Every divisor a ≤ √n pairs with exactly one cofactor n / a ≥ √n,
// so scanning up to s finds each pair once, already sorted by a.
//
// Cost is O(√n) divisions. n = 10^14 means ~10^7 iterations;
// inputs near u64::MAX take ~4 × 10^9. There is no cancellation,
// so callers bound the input size (see AppConfig::max_input).

use std::time::Instant;

use crate::domain::{
    factor_pair::FactorPair,
    result::FactorizationResult,
    traits::ResultCache,
};
use crate::math::isqrt::isqrt;

/// Run one trial-division scan. Pure: same n, same pairs.
///
/// Inputs below 2 are outside the contract; they come back with no
/// pairs and `Classification::Invalid` instead of panicking.
pub fn trial_division(n: u64) -> FactorizationResult {
    let start = Instant::now();

    if n < 2 {
        return FactorizationResult::invalid(n, start.elapsed());
    }

    let limit = isqrt(n);
    let pairs: Vec<FactorPair> = (2..=limit)
        .filter(|i| n % i == 0)
        .map(|i| FactorPair::new(i, n / i))
        .collect();

    FactorizationResult::new(n, pairs, start.elapsed())
}

/// Trial division with memoization.
///
/// The cache is injected so the caller picks the policy; pass
/// `NoopCache` to always recompute.
pub struct Factorizer<C: ResultCache> {
    cache: C,
}

impl<C: ResultCache> Factorizer<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Factorize `n`, returning a cached result when one exists.
    ///
    /// A cache hit is returned as stored, including the elapsed time
    /// of the original scan.
    pub fn factorize(&self, n: u64) -> FactorizationResult {
        if let Some(hit) = self.cache.get(n) {
            tracing::debug!("Cache hit for {}", n);
            return hit;
        }

        let result = trial_division(n);
        tracing::debug!(
            "Factorized {}: {} pair(s), {} in {:.3} ms",
            n,
            result.pair_count(),
            result.classification(),
            result.elapsed_ms(),
        );

        self.cache.put(&result);
        result
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}
