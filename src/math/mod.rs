// ============================================================
// Layer 5 — Math / Factorization Core
// ============================================================
// The only layer with algorithmic content. Everything else in
// the crate exists to feed it a validated integer and to show
// what comes back.
//
// What's in this layer:
//
//   isqrt.rs      — Exact integer square root
//                   Newton iteration on u64, so ⌊√n⌋ is exact
//                   even where f64 would round the wrong way
//
//   factorizer.rs — Trial division from 2 to ⌊√n⌋
//                   Collects (i, n / i) for every divisor i,
//                   classifies by pair count, times the scan,
//                   and memoizes through a ResultCache
//
// Reference: Rust Book §3 (Data Types: integer overflow)
//            Knuth, TAOCP Vol. 2 §4.5.4 (Factoring into primes)

/// ⌊√n⌋ without floating point
pub mod isqrt;

/// Trial-division factorizer with injectable memoization
pub mod factorizer;
