use crate::human_helpers::{format_context, format_finding_line};
use crate::report::{ErrorReport, Verbosity};
use crate::ReportFormatter;

/// Plain-text report: one templated line per finding.
pub struct HumanFormatter;

impl ReportFormatter for HumanFormatter {
    fn format_report(&self, report: &ErrorReport) -> String {
        if report.is_empty() {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();
        for finding in report.findings() {
            out.push_str(&format_finding_line(report, finding));
            out.push('\n');
            if report.verbosity() == Verbosity::High {
                out.push_str(&format_context(finding));
            }
        }
        out
    }
}
