//! Report generation — JSON and Markdown verdict output
//!
//! Wraps a [`PasteVerdict`] with timing and version metadata and renders it
//! for logs, dashboards, or instructor review.

pub mod json;
pub mod markdown;

use crate::detection::PasteVerdict;
use crate::GuardResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for a paste report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Structured JSON (machine-readable)
    Json,
    /// Human-readable Markdown
    Markdown,
}

/// A verdict plus the metadata a reviewer needs to place it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasteReport {
    /// The verdict being reported.
    pub verdict: PasteVerdict,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the verdict.
    pub engine_version: String,
}

impl PasteReport {
    pub fn new(verdict: PasteVerdict) -> Self {
        Self {
            verdict,
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Render a report to a string in the given format.
pub fn render_report(report: &PasteReport, format: ReportFormat) -> GuardResult<String> {
    match format {
        ReportFormat::Json => json::render(report),
        ReportFormat::Markdown => markdown::render(report),
    }
}

/// Write a report to a file in the given format.
pub fn write_report(report: &PasteReport, format: ReportFormat, output: &Path) -> GuardResult<()> {
    let content = render_report(report, format)?;
    std::fs::write(output, content).map_err(crate::GuardError::Io)?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::detect_copy_paste;

    fn detected_report() -> PasteReport {
        let pasted = "import { sortBy } from 'lodash';\nconst data = [3, 1, 2];\nconst sorted = sortBy(data);";
        let verdict = detect_copy_paste(pasted, "let mine = true;");
        assert!(verdict.is_detected());
        PasteReport::new(verdict)
    }

    #[test]
    fn test_json_report_preserves_score_and_question_ids() {
        let report = detected_report();
        let score = report.verdict.detection().unwrap().dissimilarity;
        let json = render_report(&report, ReportFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["verdict"]["dissimilarity"].as_f64().unwrap(),
            score
        );
        assert_eq!(
            parsed["verdict"]["questions"][0]["id"].as_str().unwrap(),
            "array-q1"
        );
    }

    #[test]
    fn test_markdown_report_lists_questions() {
        let report = detected_report();
        let md = render_report(&report, ReportFormat::Markdown).unwrap();
        assert!(md.contains("# Paste Guard Report"));
        assert!(md.contains("array-q1"));
    }

    #[test]
    fn test_not_detected_report_renders() {
        let report = PasteReport::new(PasteVerdict::NotDetected);
        let md = render_report(&report, ReportFormat::Markdown).unwrap();
        assert!(md.contains("No external paste detected"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = PasteReport::new(PasteVerdict::NotDetected);
        write_report(&report, ReportFormat::Json, &path).unwrap();
        assert!(path.exists());
    }
}
