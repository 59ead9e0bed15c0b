// ============================================================
// Layer 2 — Session
// ============================================================
// One interactive user's state: the most recent successful
// result, kept so it can be shown again or exported without
// recomputing. Each session owns its own slot; nothing is
// shared between sessions except the factorizer's memo table.
//
// Line commands:
//   <number>       → factorize, replace the last result
//   last           → show the last result again
//   export         → write the last result as CSV
//   help           → list commands
//   quit / exit    → end the session
//
// Rejected input leaves the last result untouched.

use std::path::PathBuf;

use crate::application::factor_use_case::FactorUseCase;
use crate::data::validator::ValidationError;
use crate::domain::result::FactorizationResult;

/// What happened in response to one line of input.
/// Layer 1 decides how to show each case.
#[derive(Debug)]
pub enum SessionEvent {
    Factored(FactorizationResult),
    Rejected(ValidationError),
    Cached(FactorizationResult),
    Exported { number: u64, path: PathBuf },
    ExportFailed(anyhow::Error),
    NothingCached,
    Help,
    Quit,
}

pub struct Session<'a> {
    use_case: &'a FactorUseCase,
    last:     Option<FactorizationResult>,
}

impl<'a> Session<'a> {
    pub fn new(use_case: &'a FactorUseCase) -> Self {
        Self { use_case, last: None }
    }

    /// The most recent successful result, if any
    pub fn last(&self) -> Option<&FactorizationResult> {
        self.last.as_ref()
    }

    /// Handle one line of user input
    pub fn handle(&mut self, line: &str) -> SessionEvent {
        match line.trim().to_ascii_lowercase().as_str() {
            "quit" | "exit" => SessionEvent::Quit,
            "help" | "?" => SessionEvent::Help,
            "last" => match &self.last {
                Some(r) => SessionEvent::Cached(r.clone()),
                None => SessionEvent::NothingCached,
            },
            "export" => self.export_last(),
            _ => match self.use_case.execute(line) {
                Ok(result) => {
                    self.last = Some(result.clone());
                    SessionEvent::Factored(result)
                }
                Err(e) => SessionEvent::Rejected(e),
            },
        }
    }

    fn export_last(&self) -> SessionEvent {
        let Some(result) = &self.last else {
            return SessionEvent::NothingCached;
        };

        match self.use_case.export(result) {
            Ok(path) => SessionEvent::Exported { number: result.number(), path },
            Err(e) => {
                tracing::warn!("Export failed: {e:#}");
                SessionEvent::ExportFailed(e)
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;

    fn use_case(dir: &std::path::Path) -> FactorUseCase {
        FactorUseCase::new(&AppConfig {
            export_dir: dir.to_string_lossy().into_owned(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_remembers_last_result() {
        let tmp    = tempfile::tempdir().unwrap();
        let uc     = use_case(tmp.path());
        let mut s  = Session::new(&uc);

        assert!(matches!(s.handle("last"), SessionEvent::NothingCached));
        assert!(matches!(s.handle("36"), SessionEvent::Factored(_)));

        match s.handle("last") {
            SessionEvent::Cached(r) => assert_eq!(r.number(), 36),
            other => panic!("expected cached result, got {other:?}"),
        }
    }

    #[test]
    fn test_rejection_keeps_previous_result() {
        let tmp   = tempfile::tempdir().unwrap();
        let uc    = use_case(tmp.path());
        let mut s = Session::new(&uc);

        s.handle("997");
        assert!(matches!(s.handle("abc"), SessionEvent::Rejected(ValidationError::NotAnInteger)));
        assert_eq!(s.last().map(|r| r.number()), Some(997));
    }

    #[test]
    fn test_export_last() {
        let tmp   = tempfile::tempdir().unwrap();
        let uc    = use_case(tmp.path());
        let mut s = Session::new(&uc);

        assert!(matches!(s.handle("export"), SessionEvent::NothingCached));
        s.handle("12");
        match s.handle("export") {
            SessionEvent::Exported { number, path } => {
                assert_eq!(number, 12);
                assert!(path.ends_with("factors_12.csv"));
                assert!(path.exists());
            }
            other => panic!("expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_sessions_are_independent() {
        let tmp    = tempfile::tempdir().unwrap();
        let uc     = use_case(tmp.path());
        let mut s1 = Session::new(&uc);
        let s2     = Session::new(&uc);

        s1.handle("100");
        assert!(s1.last().is_some());
        assert!(s2.last().is_none());
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let tmp   = tempfile::tempdir().unwrap();
        let uc    = use_case(tmp.path());
        let mut s = Session::new(&uc);
        assert!(matches!(s.handle("  QUIT "), SessionEvent::Quit));
        assert!(matches!(s.handle("Help"), SessionEvent::Help));
    }
}
