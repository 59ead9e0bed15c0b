// ============================================================
// Layer 1 — Presenter
// ============================================================
// Turns a FactorizationResult into text for the terminal.
// Every function returns a String so the layout can be tested
// without capturing stdout.
//
// Layout of a full result:
//
//   Results
//     Number of digits   7
//     Search space       999  (checked from 2 to √n ≈ 1,000)
//     Execution time     0.03 ms
//     Factor pairs       24
//
//   Number classification: [COMPOSITE]
//   What is this? A composite number has more than two factor pairs.
//
//   Factor pairs
//      #  Factor A  Factor B
//      1         2   500,000
//      ...
//
//   Found 24 factor pairs for 1,000,000
//
// Numbers meant for people get thousands separators; the CSV
// export (Layer 6) never does.

use std::fmt::Write;

use crate::data::validator::ValidationError;
use crate::domain::{factor_pair::FactorPair, result::FactorizationResult};

/// 1234567 → "1,234,567"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Stats panel, classification, and either the table or the prime notice
pub fn render_result(r: &FactorizationResult) -> String {
    let mut out = String::new();

    out.push_str("Results\n");
    let _ = writeln!(out, "  {:<18} {}", "Number of digits", r.digit_count());
    let _ = writeln!(
        out,
        "  {:<18} {}  (checked from 2 to √n ≈ {})",
        "Search space",
        format_number(r.search_space()),
        format_number(r.search_limit()),
    );
    let _ = writeln!(out, "  {:<18} {:.2} ms", "Execution time", r.elapsed_ms());
    let _ = writeln!(out, "  {:<18} {}", "Factor pairs", r.pair_count());
    out.push('\n');

    let classification = r.classification();
    let _ = writeln!(out, "Number classification: [{}]", classification.badge());
    if !classification.explanation().is_empty() {
        let _ = writeln!(out, "What is this? {}", classification.explanation());
    }
    out.push('\n');

    if r.pairs().is_empty() {
        out.push_str(&render_prime_notice(r.number()));
    } else {
        out.push_str("Factor pairs\n");
        out.push_str(&render_table(r.pairs()));
        out.push('\n');
        out.push_str(&render_success(r));
    }

    out
}

/// 1-indexed, right-aligned table of pairs
pub fn render_table(pairs: &[FactorPair]) -> String {
    let rows: Vec<(String, String, String)> = pairs
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1).to_string(), format_number(p.a()), format_number(p.b())))
        .collect();

    let w_idx = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(1);
    let w_a   = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max("Factor A".len());
    let w_b   = rows.iter().map(|r| r.2.len()).max().unwrap_or(0).max("Factor B".len());

    let mut out = String::new();
    let _ = writeln!(out, "  {:>w_idx$}  {:>w_a$}  {:>w_b$}", "#", "Factor A", "Factor B");
    for (idx, a, b) in &rows {
        let _ = writeln!(out, "  {idx:>w_idx$}  {a:>w_a$}  {b:>w_b$}");
    }
    out
}

/// "Found 1 factor pair for 4" / "Found 24 factor pairs for 1,000,000"
pub fn render_success(r: &FactorizationResult) -> String {
    let count  = r.pair_count();
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "Found {count} factor pair{plural} for {}\n",
        format_number(r.number())
    )
}

pub fn render_prime_notice(n: u64) -> String {
    let n = format_number(n);
    format!("{n} is a prime number! It has no factor pairs (except 1 × {n}).\n")
}

pub fn render_cached_notice(r: &FactorizationResult) -> String {
    format!(
        "Showing cached results for {}. Enter a new number to search again.\n",
        format_number(r.number())
    )
}

pub fn render_rejection(e: &ValidationError) -> String {
    format!("error: {e}\n")
}

pub fn render_help() -> String {
    concat!(
        "Enter a positive integer (commas allowed), or one of:\n",
        "  last    show the previous result again\n",
        "  export  save the previous result as CSV\n",
        "  help    show this message\n",
        "  quit    leave the session\n",
    )
    .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::factorizer::trial_division;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12_312_312), "12,312,312");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_composite_report() {
        let out = render_result(&trial_division(1_000_000));
        assert!(out.contains("[COMPOSITE]"));
        assert!(out.contains("500,000"));
        assert!(out.contains("Found 24 factor pairs for 1,000,000"));
        assert!(out.contains("√n ≈ 1,000"));
    }

    #[test]
    fn test_prime_report() {
        let out = render_result(&trial_division(997));
        assert!(out.contains("[PRIME]"));
        assert!(out.contains("997 is a prime number! It has no factor pairs (except 1 × 997)."));
        assert!(!out.contains("Factor A"));
    }

    #[test]
    fn test_singular_success_line() {
        assert_eq!(render_success(&trial_division(4)), "Found 1 factor pair for 4\n");
    }

    #[test]
    fn test_table_alignment() {
        let table = render_table(trial_division(12).pairs());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  #  Factor A  Factor B");
        assert_eq!(lines[1], "  1         2         6");
        assert_eq!(lines[2], "  2         3         4");
    }

    #[test]
    fn test_cached_notice() {
        let notice = render_cached_notice(&trial_division(12_345));
        assert!(notice.starts_with("Showing cached results for 12,345."));
    }
}
