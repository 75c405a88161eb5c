//! Output formatting for `recollfox`.
//!
//! Two renderings of a run report: the one-line human summary that the
//! original cron logs expect, and a JSON object for scripts.

use crate::error::Result;
use crate::export::ExportReport;

/// Human-readable one-line summary.
#[must_use]
pub fn summary_line(report: &ExportReport) -> String {
    format!(
        "Exported {} entries to {}",
        report.count,
        report.queue_dir.display()
    )
}

/// JSON rendering of a report.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn json_report(report: &ExportReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
