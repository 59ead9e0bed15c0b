// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `find`, `session`, and `config`
// and all their flags.
//
// clap's derive macros generate --help, error messages for
// missing args, and string → number conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::infra::config::AppConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find every factor pair of one number
    Find(FindArgs),

    /// Factorize numbers interactively, one per line
    Session(SessionArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Settings shared by `find` and `session`.
/// Flags override values from the config file.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// JSON config file (see `config init`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Largest number accepted
    #[arg(long)]
    pub max_input: Option<u64>,

    /// Memoize at most this many results (0 disables memoization)
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Directory for CSV exports
    #[arg(long)]
    pub out_dir: Option<String>,
}

/// Resolve CLI settings into the application-layer AppConfig.
/// The application layer never sees clap types.
impl SettingsArgs {
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut cfg = AppConfig::load_or_default(self.config.as_deref())?;

        if let Some(max) = self.max_input {
            cfg.max_input = max;
        }
        if let Some(cap) = self.cache_capacity {
            cfg.cache_capacity = Some(cap);
        }
        if let Some(dir) = &self.out_dir {
            cfg.export_dir = dir.clone();
        }

        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// The number to factorize, e.g. 997 or "12,312,312"
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Also save the pairs as factors_<N>.csv
    #[arg(long)]
    pub csv: bool,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the default configuration to a file
    Init {
        /// Where to write the config
        #[arg(long, default_value = "factor-pairs.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as JSON
    Show {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SettingsArgs {
            max_input: Some(500),
            cache_capacity: Some(0),
            out_dir: Some("exports".into()),
            ..SettingsArgs::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.max_input, 500);
        assert_eq!(cfg.cache_capacity, Some(0));
        assert_eq!(cfg.export_dir, "exports");
    }

    #[test]
    fn test_no_flags_means_defaults() {
        assert_eq!(SettingsArgs::default().resolve().unwrap(), AppConfig::default());
    }
}
