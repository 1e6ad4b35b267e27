//! Detection pipeline — classifier, dissimilarity, topics, questions
//!
//! The four pure stages the guard orchestrates, plus the verdict types they
//! produce. Every function here is total over arbitrary strings: empty,
//! whitespace-only, and adversarially long inputs all degrade to boundary
//! results rather than failing.

pub mod classifier;
pub mod questions;
pub mod similarity;
pub mod topics;

pub use classifier::is_likely_external;
pub use questions::generate_questions;
pub use similarity::dissimilarity_percent;
pub use topics::detect_topics;

use crate::catalog::QuestionTemplate;
use serde::{Deserialize, Serialize};

// ─── Verdict Types ──────────────────────────────────────────────────

/// A comprehension-check question gating acceptance of a flagged paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensionQuestion {
    /// Stable identifier, unique within the fixed catalog.
    pub id: String,
    /// Prompt text shown to the learner.
    pub question: String,
    /// Human-readable topic label (display only, not used for logic).
    pub related_topic: String,
    /// Learning-module identifier the UI navigates to on "learn this first".
    pub module_id: String,
}

impl From<&QuestionTemplate> for ComprehensionQuestion {
    fn from(template: &QuestionTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            question: template.prompt.to_string(),
            related_topic: template.related_topic.to_string(),
            module_id: template.module_id.to_string(),
        }
    }
}

/// Payload of a positive detection: immutable snapshots taken at the moment
/// of the paste, plus the score and questions derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The pre-paste editor content.
    pub original_code: String,
    /// The text that was pasted.
    pub pasted_code: String,
    /// Percentage of pasted lines with no exact trimmed counterpart in the
    /// original (0–100, higher = less overlap).
    pub dissimilarity: f64,
    /// At most 3 comprehension questions, in priority order.
    pub questions: Vec<ComprehensionQuestion>,
}

/// Outcome of running the paste through the guard.
///
/// `NotDetected` carries no payload: the code snapshots, score, and
/// questions only exist on the `Detected` arm, so "absent when not
/// detected" holds by construction rather than by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PasteVerdict {
    NotDetected,
    Detected(Detection),
}

impl PasteVerdict {
    pub fn is_detected(&self) -> bool {
        matches!(self, PasteVerdict::Detected(_))
    }

    /// The detection payload, when present.
    pub fn detection(&self) -> Option<&Detection> {
        match self {
            PasteVerdict::Detected(d) => Some(d),
            PasteVerdict::NotDetected => None,
        }
    }
}

impl std::fmt::Display for PasteVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasteVerdict::NotDetected => write!(f, "NOT DETECTED"),
            PasteVerdict::Detected(d) => write!(
                f,
                "DETECTED ({:.0}% new material, {} question(s))",
                d.dissimilarity,
                d.questions.len()
            ),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
