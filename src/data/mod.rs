// ============================================================
// Layer 4 — Input Data
// ============================================================
// Turns raw user text into a number the factorizer can trust.
//
//   "12,312,312"
//       │
//       ▼
//   Validator   → trims, strips separators, checks digits,
//       │         enforces 2 ≤ n ≤ max_input
//       ▼
//   12312312u64 → handed to Layer 5 (math)
//
// Nothing that fails here ever reaches the factorizer.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §9 (Recoverable Errors with Result)

/// Parses and range-checks user input
pub mod validator;
