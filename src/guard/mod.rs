//! Paste guard — configuration and detection orchestrator
//!
//! Sequences the detection stages into a single verdict: length gate →
//! external-code classifier → dissimilarity gate → topic detection →
//! question generation. Each gate returns `NotDetected` immediately on
//! failure; only a paste that clears all three produces a `Detected`
//! verdict carrying snapshots, score, and questions.

pub mod review;

pub use review::{review_answers, ReviewOutcome};

use crate::detection::{
    detect_topics, dissimilarity_percent, generate_questions, is_likely_external, Detection,
    PasteVerdict,
};
use crate::{GuardError, GuardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ─── Configuration ──────────────────────────────────────────────────

/// Guard thresholds (loaded from `pasteguard.toml` when present).
///
/// The defaults are the engine's canonical tuning; the maximum of three
/// questions per paste is an invariant of the generator, not a knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Pastes shorter than this many characters are never flagged.
    #[serde(default = "default_min_paste_chars")]
    pub min_paste_chars: usize,

    /// Pastes scoring below this dissimilarity are presumed to be internal
    /// code movement and are not flagged.
    #[serde(default = "default_min_dissimilarity")]
    pub min_dissimilarity: f64,

    /// An answer must exceed this many trimmed characters to count as
    /// substantive in the review gate.
    #[serde(default = "default_min_answer_chars")]
    pub min_answer_chars: usize,
}

fn default_min_paste_chars() -> usize {
    50
}
fn default_min_dissimilarity() -> f64 {
    30.0
}
fn default_min_answer_chars() -> usize {
    10
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_paste_chars: default_min_paste_chars(),
            min_dissimilarity: default_min_dissimilarity(),
            min_answer_chars: default_min_answer_chars(),
        }
    }
}

impl GuardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> GuardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GuardError::ConfigError(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Try to load from a project root, falling back to defaults.
    ///
    /// Checks `pasteguard.toml` first, then `.pasteguard.toml`. A missing
    /// or unparsable file never fails this entry point.
    pub fn from_project_root(root: &Path) -> Self {
        for name in ["pasteguard.toml", ".pasteguard.toml"] {
            let config_path = root.join(name);
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(config) => {
                        tracing::info!("Loaded guard config from {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load {}: {} — using defaults",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }
}

// ─── Orchestrator ───────────────────────────────────────────────────

/// The copy-paste detection engine.
///
/// Stateless beyond its configuration: safe to call repeatedly or from
/// independent call sites without coordination, and every call allocates a
/// fresh verdict.
#[derive(Debug, Clone, Default)]
pub struct PasteGuard {
    config: GuardConfig,
}

impl PasteGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run the full pipeline on a paste event.
    ///
    /// Total over arbitrary input, including empty strings; no branch
    /// panics or errors.
    pub fn detect(&self, pasted_text: &str, original_content: &str) -> PasteVerdict {
        // Too short to bother the learner about
        if pasted_text.chars().count() < self.config.min_paste_chars {
            tracing::debug!("paste below length gate, not flagged");
            return PasteVerdict::NotDetected;
        }

        if !is_likely_external(pasted_text) {
            tracing::debug!("paste did not classify as external code");
            return PasteVerdict::NotDetected;
        }

        // Low dissimilarity means the paste largely duplicates existing
        // content: presumed internal code movement, not an external paste.
        let dissimilarity = dissimilarity_percent(original_content, pasted_text);
        if dissimilarity < self.config.min_dissimilarity {
            tracing::debug!(dissimilarity, "paste overlaps existing content, not flagged");
            return PasteVerdict::NotDetected;
        }

        let topics = detect_topics(pasted_text);
        let questions = generate_questions(pasted_text, &topics);
        tracing::info!(
            dissimilarity,
            topics = topics.len(),
            questions = questions.len(),
            "external paste detected"
        );

        PasteVerdict::Detected(Detection {
            original_code: original_content.to_string(),
            pasted_code: pasted_text.to_string(),
            dissimilarity,
            questions,
        })
    }

    /// Evaluate the learner's answers to the comprehension questions.
    pub fn review_answers(&self, answers: &[String]) -> ReviewOutcome {
        review_answers(answers, self.config.min_answer_chars)
    }
}

/// Run detection with default configuration.
pub fn detect_copy_paste(pasted_text: &str, original_content: &str) -> PasteVerdict {
    PasteGuard::default().detect(pasted_text, original_content)
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_paste_never_flagged() {
        // Suspicious shape, but under 50 characters
        let verdict = detect_copy_paste("class X {}", "");
        assert!(!verdict.is_detected());
    }

    #[test]
    fn test_non_external_paste_not_flagged() {
        let pasted = "let a = 1; let b = 2; let c = 3; let d = 4; let e = 5;";
        assert!(pasted.len() >= 50);
        let verdict = detect_copy_paste(pasted, "");
        assert!(!verdict.is_detected());
    }

    #[test]
    fn test_duplicate_of_existing_content_not_flagged() {
        // External-looking, but identical to the editor content: scores 0
        let code = "import { a } from 'pkg';\nconst x = [1, 2, 3];\nconst y = x.map(v => v * 2);";
        let verdict = detect_copy_paste(code, code);
        assert!(!verdict.is_detected());
    }

    #[test]
    fn test_external_paste_against_empty_editor_not_flagged() {
        // Empty original means dissimilarity 0, which stays under the gate.
        let pasted = "import { a } from 'pkg';\nconst x = 1;\nconst y = 2;\nmore();";
        assert!(pasted.len() >= 50);
        let verdict = detect_copy_paste(pasted, "");
        assert!(!verdict.is_detected());
    }

    #[test]
    fn test_detected_verdict_carries_snapshots() {
        let original = "let mine = true;";
        let pasted = "import { sortBy } from 'lodash';\nconst data = [3, 1, 2];\nconst sorted = sortBy(data);";
        let verdict = detect_copy_paste(pasted, original);
        let detection = verdict.detection().expect("should be detected");
        assert_eq!(detection.original_code, original);
        assert_eq!(detection.pasted_code, pasted);
        assert!(detection.dissimilarity >= 30.0);
        assert!(!detection.questions.is_empty());
        assert!(detection.questions.len() <= 3);
    }

    #[test]
    fn test_custom_threshold_raises_length_gate() {
        let config = GuardConfig {
            min_paste_chars: 1000,
            ..GuardConfig::default()
        };
        let guard = PasteGuard::new(config);
        let pasted = "import { a } from 'pkg';\n".repeat(4);
        let verdict = guard.detect(&pasted, "something else entirely");
        assert!(!verdict.is_detected());
    }

    #[test]
    fn test_config_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.min_paste_chars, 50);
        assert_eq!(config.min_dissimilarity, 30.0);
        assert_eq!(config.min_answer_chars, 10);
    }

    #[test]
    fn test_from_project_root_without_file_uses_defaults() {
        let config = GuardConfig::from_project_root(Path::new("/nonexistent/project"));
        assert_eq!(config.min_paste_chars, 50);
    }
}
