//! # pasteguard — Educational Copy-Paste Guard Engine
//!
//! Heuristic detection engine that decides whether text pasted into a
//! learning-oriented code editor is likely external/copied code, and gates
//! its acceptance behind comprehension-check questions.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       PasteGuard                           │
//! │  ┌───────────┐ ┌────────────┐ ┌──────────────┐            │
//! │  │Length gate│→│ Classifier │→│Dissimilarity │→ verdict   │
//! │  └───────────┘ └─────┬──────┘ └──────┬───────┘            │
//! │                      │               │                    │
//! │          ┌───────────▼───┐   ┌───────▼────────┐           │
//! │          │Suspicious     │   │ Line-overlap   │           │
//! │          │pattern set    │   │ estimator      │           │
//! │          └───────────────┘   └────────────────┘           │
//! │                                                           │
//! │  Detected → Topic detector → Question generator (≤3)      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage is a total, pure function over strings: no I/O, no shared
//! mutable state, no panics on any input. The only entry points with error
//! surfaces are configuration loading and report writing.
//!
//! ## Capabilities
//!
//! - **External-code classification**: regex pattern set + structural counts
//! - **Dissimilarity scoring**: exact trimmed-line overlap, 0–100
//! - **Topic detection**: keyword tables for loops/arrays/recursion/algorithms
//! - **Question generation**: fixed catalog, at most 3 per paste
//! - **Answer review gate**: accepts the paste once every answer is substantive
//! - **Scripted assistant**: deterministic reply engine with module redirects
//! - **Report rendering**: JSON and Markdown verdict reports

pub mod assistant;
pub mod catalog;
pub mod detection;
pub mod guard;
pub mod modules;
pub mod report;

// Re-exports for convenience
pub use catalog::Topic;
pub use detection::{ComprehensionQuestion, Detection, PasteVerdict};
pub use guard::{detect_copy_paste, GuardConfig, PasteGuard, ReviewOutcome};
pub use modules::{Difficulty, LearningModule};
pub use report::{render_report, write_report, PasteReport, ReportFormat};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type GuardResult<T> = Result<T, GuardError>;
