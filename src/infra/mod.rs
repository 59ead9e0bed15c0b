// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one use case:
//
//   cache.rs      — ResultCache implementations
//                   MemoryCache (unbounded), BoundedCache (FIFO
//                   eviction), NoopCache (stores nothing).
//
//   csv_export.rs — CSV export of factor pairs
//                   Exact "Factor A,Factor B" format, file name
//                   factors_{n}.csv, plus a parser for reading
//                   an export back.
//
//   config.rs     — AppConfig
//                   Input bound, cache policy, and export
//                   directory, saved and loaded as JSON.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Memoization tables for the factorizer
pub mod cache;

/// CSV export and re-import
pub mod csv_export;

/// JSON configuration file
pub mod config;
