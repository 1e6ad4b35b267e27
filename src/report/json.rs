//! JSON report renderer

use crate::report::PasteReport;
use crate::GuardResult;

/// Render a paste report as pretty-printed JSON
pub fn render(report: &PasteReport) -> GuardResult<String> {
    serde_json::to_string_pretty(report).map_err(crate::GuardError::SerdeError)
}
