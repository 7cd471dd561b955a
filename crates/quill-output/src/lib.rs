//! Report formatters for quill findings.
//!
//! Provides two output modes:
//! - **Human** (default): one templated line per finding, with docstring
//!   excerpts and fix hints at high verbosity
//! - **JSON** (`--json`): Machine-readable finding records

pub mod human;
pub(crate) mod human_helpers;
pub mod json;
pub mod report;

pub use report::{ErrorReport, Verbosity};

pub trait ReportFormatter {
    fn format_report(&self, report: &ErrorReport) -> String;

    /// Several reports (one per source) as a single output.
    fn format_reports(&self, reports: &[ErrorReport]) -> String {
        reports.iter().map(|r| self.format_report(r)).collect()
    }
}
