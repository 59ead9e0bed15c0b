// ============================================================
// Layer 2 — FactorReport
// ============================================================
// A flat, serialisable view of one result with the derived
// statistics already computed. Printed by `find --json`:
//
//   {
//     "number": 36,
//     "classification": "Composite",
//     "pairs": [[2, 18], [3, 12], [4, 9], [6, 6]],
//     "pair_count": 4,
//     "digit_count": 2,
//     "search_limit": 6,
//     "search_space": 5,
//     "elapsed_ms": 0.0012
//   }

use serde::Serialize;

use crate::domain::{classification::Classification, result::FactorizationResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorReport {
    pub number:         u64,
    pub classification: Classification,
    pub pairs:          Vec<(u64, u64)>,
    pub pair_count:     usize,
    pub digit_count:    usize,
    pub search_limit:   u64,
    pub search_space:   u64,
    pub elapsed_ms:     f64,
}

impl From<&FactorizationResult> for FactorReport {
    fn from(r: &FactorizationResult) -> Self {
        Self {
            number:         r.number(),
            classification: r.classification(),
            pairs:          r.pairs().iter().map(|&p| p.into()).collect(),
            pair_count:     r.pair_count(),
            digit_count:    r.digit_count(),
            search_limit:   r.search_limit(),
            search_space:   r.search_space(),
            elapsed_ms:     r.elapsed_ms(),
        }
    }
}
