//! Blank-line normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of three or more newlines, collapsed to a single blank line.
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank run regex"));

/// Collapses every run of three or more consecutive newlines to exactly
/// two, leaving at most one fully blank line between blocks. One global
/// pass; applying it again is a no-op.
pub fn collapse_blank_lines(source: &str) -> String {
    BLANK_RUNS.replace_all(source, "\n\n").into_owned()
}
