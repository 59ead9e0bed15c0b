// ============================================================
// Layer 3 — Classification
// ============================================================
// A number is classified purely by how many non-trivial factor
// pairs it has:
//
//   0 pairs  → Prime
//   1 pair   → Semiprime
//   2+ pairs → Composite
//
// Invalid marks inputs below 2, which have no meaningful
// classification at all.
//
// Note that the pair count is the only input, so 8 = 2 × 4 is
// reported as Semiprime even though 4 is not prime.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Prime,
    Semiprime,
    Composite,
    Invalid,
}

impl Classification {
    /// Classify a valid (n ≥ 2) input by its number of factor pairs
    pub fn from_pair_count(count: usize) -> Self {
        match count {
            0 => Classification::Prime,
            1 => Classification::Semiprime,
            _ => Classification::Composite,
        }
    }

    /// Upper-case label used for the badge
    pub fn badge(&self) -> &'static str {
        match self {
            Classification::Prime     => "PRIME",
            Classification::Semiprime => "SEMIPRIME",
            Classification::Composite => "COMPOSITE",
            Classification::Invalid   => "INVALID",
        }
    }

    /// One-sentence explanation, empty for Invalid
    pub fn explanation(&self) -> &'static str {
        match self {
            Classification::Prime => {
                "A prime number has no factors other than 1 and itself."
            }
            Classification::Semiprime => {
                "A semiprime is the product of exactly two prime numbers."
            }
            Classification::Composite => {
                "A composite number has more than two factor pairs."
            }
            Classification::Invalid => "",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Prime     => "Prime",
            Classification::Semiprime => "Semiprime",
            Classification::Composite => "Composite",
            Classification::Invalid   => "Invalid",
        };
        f.write_str(name)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair_count() {
        assert_eq!(Classification::from_pair_count(0), Classification::Prime);
        assert_eq!(Classification::from_pair_count(1), Classification::Semiprime);
        assert_eq!(Classification::from_pair_count(2), Classification::Composite);
        assert_eq!(Classification::from_pair_count(48), Classification::Composite);
    }

    #[test]
    fn test_invalid_has_no_explanation() {
        assert!(Classification::Invalid.explanation().is_empty());
        assert!(!Classification::Prime.explanation().is_empty());
    }

    #[test]
    fn test_display_and_badge() {
        assert_eq!(Classification::Semiprime.to_string(), "Semiprime");
        assert_eq!(Classification::Semiprime.badge(), "SEMIPRIME");
    }
}
