//! Markdown report renderer
//!
//! Produces a compact Markdown document an instructor can skim: verdict,
//! score, the comprehension questions asked, and both code snapshots.

use crate::detection::PasteVerdict;
use crate::report::PasteReport;
use crate::GuardResult;

/// Render a paste report as Markdown
pub fn render(report: &PasteReport) -> GuardResult<String> {
    let mut md = String::with_capacity(2048);

    md.push_str("# Paste Guard Report\n\n");
    md.push_str("| Field | Value |\n|---|---|\n");
    md.push_str(&format!(
        "| **Generated** | {} |\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "| **Engine Version** | {} |\n",
        report.engine_version
    ));
    md.push_str(&format!("| **Verdict** | {} |\n\n", report.verdict));

    match &report.verdict {
        PasteVerdict::NotDetected => {
            md.push_str("✅ No external paste detected.\n");
        }
        PasteVerdict::Detected(detection) => {
            md.push_str(&format!(
                "⚠️ **External paste detected** — {:.1}% of pasted lines have no counterpart in the editor content.\n\n",
                detection.dissimilarity
            ));

            md.push_str("## Comprehension Questions\n\n");
            for (i, q) in detection.questions.iter().enumerate() {
                md.push_str(&format!(
                    "{}. {} _(id: {}, topic: {}, module: {})_\n",
                    i + 1,
                    q.question,
                    q.id,
                    q.related_topic,
                    q.module_id
                ));
            }
            md.push('\n');

            md.push_str("## Pasted Code\n\n```\n");
            md.push_str(&detection.pasted_code);
            md.push_str("\n```\n\n## Editor Content at Paste\n\n```\n");
            md.push_str(&detection.original_code);
            md.push_str("\n```\n");
        }
    }

    Ok(md)
}

// ─── Tests ──────────────────────────────────────────────────────────
