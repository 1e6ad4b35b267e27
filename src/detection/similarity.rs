//! Dissimilarity estimator — exact trimmed-line overlap
//!
//! Measures how much of a paste is *new* relative to the editor's existing
//! content: the percentage of pasted lines that have no exact trimmed-text
//! counterpart anywhere in the original. Set membership only — position
//! does not matter, and a line repeated in the original is still a single
//! match target. Semantically identical but differently formatted lines
//! never match; this is deliberate for a heuristic that only needs to
//! distinguish "moved my own code" from "brought in someone else's".

use std::collections::HashSet;

/// Percentage of pasted lines lacking an exact trimmed match in `original`,
/// in [0, 100]. Higher = less overlap.
///
/// Returns 0 when either input is empty or the paste has no non-empty
/// lines after trimming.
pub fn dissimilarity_percent(original: &str, pasted: &str) -> f64 {
    if original.is_empty() || pasted.is_empty() {
        return 0.0;
    }

    let original_lines: HashSet<&str> = original
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let pasted_lines: Vec<&str> = pasted
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if pasted_lines.is_empty() {
        return 0.0;
    }

    let matches = pasted_lines
        .iter()
        .filter(|l| original_lines.contains(*l))
        .count();

    (1.0 - matches as f64 / pasted_lines.len() as f64) * 100.0
}

// ─── Tests ──────────────────────────────────────────────────────────
