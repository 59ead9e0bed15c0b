// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The factorizer memoizes through a trait rather than a hidden
// global table, so callers choose the policy:
//
//   - MemoryCache  → unbounded, lives as long as the process
//   - BoundedCache → keeps only the newest N results
//   - NoopCache    → stores nothing (handy in tests)
//
// All three live in Layer 6 (infra); the factorizer only sees
// ResultCache.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::result::FactorizationResult;

// ─── ResultCache ──────────────────────────────────────────────────────────────
/// A memo table keyed by the exact input value.
///
/// Methods take `&self` and the trait is `Send + Sync`, so
/// implementations must guard their storage themselves. That
/// keeps one factorizer shareable across threads.
pub trait ResultCache: Send + Sync {
    /// Look up a previously computed result for `n`
    fn get(&self, n: u64) -> Option<FactorizationResult>;

    /// Remember a result, keyed by `result.number()`
    fn put(&self, result: &FactorizationResult);
}

impl<C: ResultCache + ?Sized> ResultCache for &C {
    fn get(&self, n: u64) -> Option<FactorizationResult> {
        (**self).get(n)
    }

    fn put(&self, result: &FactorizationResult) {
        (**self).put(result)
    }
}

impl<C: ResultCache + ?Sized> ResultCache for Box<C> {
    fn get(&self, n: u64) -> Option<FactorizationResult> {
        (**self).get(n)
    }

    fn put(&self, result: &FactorizationResult) {
        (**self).put(result)
    }
}
