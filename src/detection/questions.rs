//! Comprehension-question generator
//!
//! Maps detected topics (or the lack of any) to a bounded list of questions
//! from the fixed catalog. Each priority branch can append independently of
//! the others; the result is truncated to three, so lower-priority questions
//! are silently dropped when earlier topics already filled the list.
//!
//! Alongside the keyword-driven topic set, each branch re-tests the raw code
//! against its own structural hint regex. These hints are a second rule set,
//! kept separate from the classifier's suspicious patterns even where they
//! overlap in purpose.

use crate::catalog::{Topic, ARRAY_Q1, GENERIC_Q1, GENERIC_Q2, LOOP_Q1, LOOP_Q2, RECURSION_Q1};
use crate::detection::ComprehensionQuestion;
use once_cell::sync::Lazy;
use regex::Regex;

/// Hard upper bound on questions per paste.
pub const MAX_QUESTIONS: usize = 3;

static LOOP_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for\s*\(|while\s*\(").expect("loop hint must compile"));

static ARRAY_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*\]|\.(push|pop|map|filter)").expect("array hint must compile"));

/// Self-reference hint for recursion. The `\x01` control character stands
/// where a backreference to the function name would go, so in practice this
/// pattern never fires and the keyword branch carries the recursion check.
/// Kept as-is rather than repaired; widening it would change which pastes
/// get a recursion question.
static RECURSION_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+\w+[^}]+\x01\s*\(").expect("recursion hint must compile"));

/// Generate at most [`MAX_QUESTIONS`] comprehension questions for a paste.
///
/// Branches run in fixed priority order and are not exclusive; the generic
/// fallback fires only when no topical branch appended anything.
pub fn generate_questions(code: &str, topics: &[Topic]) -> Vec<ComprehensionQuestion> {
    let mut questions: Vec<ComprehensionQuestion> = Vec::new();

    if topics.contains(&Topic::Loops) || LOOP_HINT.is_match(code) {
        questions.push(ComprehensionQuestion::from(&LOOP_Q1));
        questions.push(ComprehensionQuestion::from(&LOOP_Q2));
    }

    if topics.contains(&Topic::Arrays) || ARRAY_HINT.is_match(code) {
        questions.push(ComprehensionQuestion::from(&ARRAY_Q1));
    }

    if topics.contains(&Topic::Recursion) || RECURSION_HINT.is_match(code) {
        questions.push(ComprehensionQuestion::from(&RECURSION_Q1));
    }

    // Generic fallback when nothing topical matched
    if questions.is_empty() {
        questions.push(ComprehensionQuestion::from(&GENERIC_Q1));
        questions.push(ComprehensionQuestion::from(&GENERIC_Q2));
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

// ─── Tests ──────────────────────────────────────────────────────────
