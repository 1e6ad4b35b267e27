//! Answer review gate
//!
//! Decides whether a learner's answers to the comprehension questions are
//! substantive enough to accept the flagged paste. No grading of content —
//! the check is simply that every answer carries more than a threshold of
//! trimmed characters. Deliberately shallow: the point is friction and
//! reflection, not assessment.

use serde::{Deserialize, Serialize};

/// Outcome of reviewing the learner's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    /// Every answer was substantive; the paste may be accepted.
    Passed,
    /// At least one answer was too thin; route the learner to the module.
    NeedsStudy,
}

impl ReviewOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ReviewOutcome::Passed)
    }
}

impl std::fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::NeedsStudy => write!(f, "NEEDS STUDY"),
        }
    }
}

/// Review a full set of answers against the minimum-length threshold.
///
/// An empty answer list passes vacuously: no questions were asked, so
/// there is nothing to defend.
pub fn review_answers(answers: &[String], min_answer_chars: usize) -> ReviewOutcome {
    let all_substantive = answers
        .iter()
        .all(|a| a.trim().chars().count() > min_answer_chars);

    if all_substantive {
        ReviewOutcome::Passed
    } else {
        ReviewOutcome::NeedsStudy
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
