// ============================================================
// Layer 6 — CSV Export
// ============================================================
// Writes the factor pairs of one result to a CSV file so they
// can be opened in a spreadsheet.
//
// Format (exact):
//   Factor A,Factor B
//   2,500000
//   4,250000
//   ...
//   1000,1000
//
//   - header row always present, even for a prime
//   - plain integers, no thousands separators, no quoting
//   - one \n-terminated line per pair, ascending by Factor A
//
// File name: factors_{n}.csv, n unformatted.
//
// parse_csv reads the same format back, which lets tests (and
// users) check an exported file against a fresh computation.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error;

use crate::domain::{factor_pair::FactorPair, result::FactorizationResult};

/// The one and only header row
pub const CSV_HEADER: &str = "Factor A,Factor B";

/// Errors from reading an exported CSV back in.
/// Line numbers are 1-based and count the header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    #[error("CSV is empty, expected header 'Factor A,Factor B'")]
    MissingHeader,

    #[error("Unexpected CSV header '{found}', expected 'Factor A,Factor B'")]
    BadHeader { found: String },

    #[error("Line {line}: expected 2 columns, found {found}")]
    WrongColumnCount { line: usize, found: usize },

    #[error("Line {line}: '{value}' is not a positive integer")]
    BadInteger { line: usize, value: String },

    #[error("Line {line}: Factor A ({a}) is greater than Factor B ({b})")]
    Unordered { line: usize, a: u64, b: u64 },
}

/// `factors_{n}.csv`
pub fn export_file_name(n: u64) -> String {
    format!("factors_{n}.csv")
}

/// Write header plus one row per pair to any writer
pub fn write_csv<W: Write>(mut w: W, pairs: &[FactorPair]) -> io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for p in pairs {
        writeln!(w, "{},{}", p.a(), p.b())?;
    }
    w.flush()
}

/// Render a result's pairs as CSV text
pub fn to_csv_string(result: &FactorizationResult) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> can't fail
    let _ = write_csv(&mut buf, result.pairs());
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parse CSV text in the export format back into pairs, preserving order
pub fn parse_csv(text: &str) -> std::result::Result<Vec<FactorPair>, CsvError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let header = lines.next().ok_or(CsvError::MissingHeader)?;
    if header != CSV_HEADER {
        return Err(CsvError::BadHeader { found: header.to_string() });
    }

    let mut pairs = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        if line.is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() != 2 {
            return Err(CsvError::WrongColumnCount { line: line_no, found: cols.len() });
        }

        let parse = |s: &str| match s.parse::<u64>() {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(CsvError::BadInteger {
                line:  line_no,
                value: s.to_string(),
            }),
        };
        let (a, b) = (parse(cols[0])?, parse(cols[1])?);
        if a > b {
            return Err(CsvError::Unordered { line: line_no, a, b });
        }
        pairs.push(FactorPair::new(a, b));
    }

    Ok(pairs)
}

/// Writes export files into a fixed directory.
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `factors_{n}.csv` into the export directory,
    /// replacing any previous export of the same number.
    /// Returns the path written.
    pub fn export(&self, result: &FactorizationResult) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Cannot create export directory '{}'", self.dir.display())
        })?;

        let path = self.dir.join(export_file_name(result.number()));
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        write_csv(io::BufWriter::new(file), result.pairs())
            .with_context(|| format!("Cannot write CSV to '{}'", path.display()))?;

        tracing::debug!(
            "Exported {} pair(s) to '{}'",
            result.pair_count(),
            path.display()
        );
        Ok(path)
    }
}
