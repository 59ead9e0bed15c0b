// ============================================================
// Layer 4 — Input Validator
// ============================================================
// Accepts the kinds of numbers people actually type:
//
//   "997"          → 997
//   "12,312,312"   → 12312312   (thousands separators)
//   " 1 000 000 "  → 1000000    (spaces anywhere, padding)
//
// and rejects everything else with a message meant for the user:
//
//   ""  / "   "    → Empty
//   "abc", "-5"    → NotAnInteger  (any non-digit after cleaning)
//   "0", "1"       → TooSmall
//   > max_input    → TooLarge      (also anything beyond u64)
//
// Cleaning steps (applied in order):
//   1. Drop every ',' and ' '
//   2. Trim remaining leading/trailing whitespace (tabs, newlines)
//   3. Require ASCII digits only, at least one
//
// Reference: Rust Book §8 (Strings in Rust)
//            thiserror crate documentation

use thiserror::Error;

/// 10^14: about 10^7 trial divisions, well under a second
pub const DEFAULT_MAX_INPUT: u64 = 100_000_000_000_000;

/// Why a piece of input was rejected. The Display text is shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a number.")]
    Empty,

    #[error("Please enter a valid positive integer.")]
    NotAnInteger,

    #[error("Please enter a number greater than 1.")]
    TooSmall,

    #[error("Please enter a number no greater than {max}.")]
    TooLarge { max: u64 },
}

pub struct Validator {
    max_input: u64,
}

impl Validator {
    /// Create a Validator that accepts 2..=max_input
    pub fn new(max_input: u64) -> Self {
        Self { max_input }
    }

    /// Strip separators and padding, leaving only what should be digits
    pub fn clean(&self, text: &str) -> String {
        let stripped: String = text
            .chars()
            .filter(|&c| c != ',' && c != ' ')
            .collect();
        stripped.trim().to_string()
    }

    /// Parse raw text into a number the factorizer accepts
    pub fn validate(&self, text: &str) -> Result<u64, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let cleaned = self.clean(text);
        if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotAnInteger);
        }

        // All digits, so the only possible parse failure is overflow
        let n: u64 = cleaned
            .parse()
            .map_err(|_| ValidationError::TooLarge { max: self.max_input })?;

        if n < 2 {
            return Err(ValidationError::TooSmall);
        }
        if n > self.max_input {
            return Err(ValidationError::TooLarge { max: self.max_input });
        }

        Ok(n)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT)
    }
}
