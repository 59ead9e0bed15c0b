// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to get something done.
//
// Rules for this layer:
//   - No arithmetic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Validate → factorize → (optionally) export
pub mod factor_use_case;

// Per-session "last result" slot and line commands
pub mod session;

// Serialisable summary of one result (for --json)
pub mod report;
