// ============================================================
// Layer 5 — Integer Square Root
// ============================================================
// (n as f64).sqrt() is only exact up to 2^53. Above that the
// rounded result can be off by one, which would make the
// factorizer skip (or over-run) the last candidate divisor.
//
// Newton's iteration on integers, started above the true root,
// decreases monotonically and stops at exactly ⌊√n⌋:
//
//   x_{k+1} = (x_k + n / x_k) / 2      until x_{k+1} ≥ x_k

/// Exact ⌊√n⌋ for any `u64`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // 2^⌈bits/2⌉ is always ≥ √n, and at most 2^32 so x + n / x
    // can't overflow
    let bits  = u64::BITS - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);

    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
