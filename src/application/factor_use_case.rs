// ============================================================
// Layer 2 — FactorUseCase
// ============================================================
// Runs one request end to end:
//
//   Step 1: Validate raw text          (Layer 4 - data)
//   Step 2: Factorize, maybe memoized  (Layer 5 - math)
//   Step 3: Export CSV on request      (Layer 6 - infra)
//
// Rejected input stops at Step 1 and is returned as a
// ValidationError; the factorizer never sees it.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::PathBuf;

use crate::data::validator::{ValidationError, Validator};
use crate::domain::{result::FactorizationResult, traits::ResultCache};
use crate::infra::{config::AppConfig, csv_export::CsvExporter};
use crate::math::factorizer::Factorizer;

// ─── FactorUseCase ────────────────────────────────────────────────────────────
pub struct FactorUseCase {
    validator:  Validator,
    factorizer: Factorizer<Box<dyn ResultCache>>,
    exporter:   CsvExporter,
}

impl FactorUseCase {
    /// Wire up validator, factorizer, and exporter from config
    pub fn new(config: &AppConfig) -> Self {
        Self::with_cache(config, config.build_cache())
    }

    /// Same as `new`, but with a caller-supplied memo table
    pub fn with_cache(config: &AppConfig, cache: Box<dyn ResultCache>) -> Self {
        Self {
            validator:  Validator::new(config.max_input),
            factorizer: Factorizer::new(cache),
            exporter:   CsvExporter::new(&config.export_dir),
        }
    }

    /// Validate `input` and factorize it
    pub fn execute(&self, input: &str) -> Result<FactorizationResult, ValidationError> {
        let n = self.validator.validate(input).map_err(|e| {
            tracing::debug!("Rejected input {:?}: {}", input, e);
            e
        })?;

        tracing::info!("Searching for factor pairs of {}...", n);
        let result = self.factorizer.factorize(n);
        tracing::info!(
            "{} is {} ({} pair(s), {:.2} ms)",
            n,
            result.classification(),
            result.pair_count(),
            result.elapsed_ms(),
        );

        Ok(result)
    }

    /// Write `factors_{n}.csv` into the configured export directory
    pub fn export(&self, result: &FactorizationResult) -> Result<PathBuf> {
        let path = self.exporter.export(result)?;
        tracing::info!("Saved CSV to '{}'", path.display());
        Ok(path)
    }
}
