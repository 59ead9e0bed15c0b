// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define what a
// factorization IS, independent of how it is computed or shown.
//
// Rules for this layer:
//   - NO terminal output or formatting for humans
//   - NO file I/O
//   - NO clap or serde_json types
//   - Only plain data and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A single (a, b) divisor pair with a ≤ b
pub mod factor_pair;

// Prime / Semiprime / Composite / Invalid
pub mod classification;

// The full outcome of one factorization
pub mod result;

// Core abstractions (traits) that other layers implement
pub mod traits;
