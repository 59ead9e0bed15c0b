// ============================================================
// Layer 6 — Configuration
// ============================================================
// Settings that outlive a single command, stored as pretty JSON:
//
//   {
//     "max_input": 100000000000000,
//     "cache_capacity": null,
//     "export_dir": "."
//   }
//
//   max_input      — largest number the validator accepts.
//                    Trial division is O(√n) with no way to stop
//                    it early, so this is what bounds latency.
//   cache_capacity — null → unbounded memo table
//                    0    → no memoization
//                    k    → keep the newest k results
//   export_dir     — where `--csv` and `export` write files
//
// Missing fields fall back to the defaults below, so a config
// file only needs the keys it changes.
//
// Reference: serde documentation (#[serde(default)])
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::data::validator::DEFAULT_MAX_INPUT;
use crate::domain::traits::ResultCache;
use crate::infra::cache::{BoundedCache, MemoryCache, NoopCache};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub max_input:      u64,
    pub cache_capacity: Option<usize>,
    pub export_dir:     String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_input:      DEFAULT_MAX_INPUT,
            cache_capacity: None,
            export_dir:     ".".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Save as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create config directory '{}'", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved config to '{}'", path.display());
        Ok(())
    }

    /// Build the memo table described by `cache_capacity`
    pub fn build_cache(&self) -> Box<dyn ResultCache> {
        match self.cache_capacity {
            None => Box::new(MemoryCache::new()),
            Some(0) => Box::new(NoopCache),
            Some(k) => Box::new(BoundedCache::new(k)),
        }
    }
}
