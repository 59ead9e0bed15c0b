//! Find every non-trivial factor pair of an integer by trial division,
//! classify it as prime, semiprime, or composite, and export the pairs
//! as CSV.
//!
//! Layers, outermost first:
//!
//! | Layer | Module        | Role                                        |
//! |-------|---------------|---------------------------------------------|
//! | 1     | `cli`         | argument parsing, terminal output, session  |
//! | 2     | `application` | use cases and per-session state             |
//! | 3     | `domain`      | pairs, classification, results, cache trait |
//! | 4     | `data`        | input validation                            |
//! | 5     | `math`        | integer square root, trial division         |
//! | 6     | `infra`       | caches, CSV export, config file             |

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod math;
pub mod infra;
