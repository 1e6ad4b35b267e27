//! External-code classifier
//!
//! Decides whether a block of pasted text looks like code brought in from
//! an external source, as opposed to something the learner typed or moved
//! themselves. A boolean OR over four independent signals: the suspicious
//! pattern set, raw line count, multiple function declarations, and class
//! declarations. The last two overlap with patterns in the set on purpose;
//! they are separate rules and stay separate.

use crate::catalog::SUSPICIOUS_PATTERNS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pastes longer than this many lines are suspicious regardless of shape.
const LINE_LIMIT: usize = 10;

static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+\w+").expect("function pattern must compile"));

static CLASS_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+\w+").expect("class pattern must compile"));

/// Classify a paste as likely-external code.
///
/// Total over arbitrary input: empty text is one line, matches nothing,
/// and classifies as `false`.
pub fn is_likely_external(code: &str) -> bool {
    if SUSPICIOUS_PATTERNS.iter().any(|p| p.is_match(code)) {
        return true;
    }

    // Longer pastes are more suspicious on their own
    if code.split('\n').count() > LINE_LIMIT {
        return true;
    }

    let has_multiple_functions = FUNCTION_DECL.find_iter(code).count() > 1;
    let has_classes = CLASS_DECL.is_match(code);

    has_multiple_functions || has_classes
}

// ─── Tests ──────────────────────────────────────────────────────────
