// ============================================================
// Layer 3 — FactorPair Domain Type
// ============================================================
// One non-trivial divisor pair of n:
//
//   n = 36  →  (2, 18), (3, 12), (4, 9), (6, 6)
//
// The smaller factor always comes first, so a pair is unique
// for a given n. The trivial pair (1, n) is never produced.
//
// Reference: Rust Book §5 (Structs)

/// An ordered divisor pair `(a, b)` with `a ≤ b` and `a × b = n`.
///
/// Fields are private so a pair can't be mutated after the
/// factorizer produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactorPair {
    a: u64,
    b: u64,
}

impl FactorPair {
    /// Create a pair, putting the smaller factor first
    pub fn new(x: u64, y: u64) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// The smaller factor (the divisor found by the scan)
    pub fn a(&self) -> u64 {
        self.a
    }

    /// The larger cofactor, n / a
    pub fn b(&self) -> u64 {
        self.b
    }

    /// a × b, widened so it can never overflow
    pub fn product(&self) -> u128 {
        u128::from(self.a) * u128::from(self.b)
    }
}

impl From<FactorPair> for (u64, u64) {
    fn from(p: FactorPair) -> Self {
        (p.a, p.b)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_factors() {
        let p = FactorPair::new(18, 2);
        assert_eq!(p.a(), 2);
        assert_eq!(p.b(), 18);
        assert_eq!(FactorPair::new(2, 18), p);
    }

    #[test]
    fn test_product_does_not_overflow() {
        let p = FactorPair::new(u64::MAX, u64::MAX);
        assert_eq!(p.product(), u128::from(u64::MAX) * u128::from(u64::MAX));
    }
}
