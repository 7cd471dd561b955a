use serde::Serialize;

use quill_core::{ErrorCode, Finding};

use crate::report::{ErrorReport, Verbosity};
use crate::ReportFormatter;

pub struct JsonFormatter;

/// Flat, serializable view of one finding.
#[derive(Debug, Clone, Serialize)]
pub struct FindingRecord<'a> {
    pub path: &'a str,
    pub code: ErrorCode,
    pub unit: &'a str,
    pub line: u32,
    pub end_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<&'a str>,
    pub message: String,
}

impl<'a> FindingRecord<'a> {
    pub fn new(path: &'a str, f: &'a Finding, verbosity: Verbosity) -> Self {
        Self {
            path,
            code: f.code,
            unit: &f.unit.name,
            line: f.start_line(),
            end_line: f.end_line(),
            name: f.name.as_deref(),
            expected: f.expected.as_deref(),
            actual: f.actual.as_deref(),
            message: match verbosity {
                Verbosity::Low => f.terse_message(),
                _ => f.full_message(),
            },
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ErrorReport) -> String {
        let records: Vec<FindingRecord<'_>> = report
            .findings()
            .iter()
            .map(|f| FindingRecord::new(report.source(), f, report.verbosity()))
            .collect();
        serde_json::to_string_pretty(&records).unwrap_or_default()
    }

    /// One flat array across all sources.
    fn format_reports(&self, reports: &[ErrorReport]) -> String {
        let records: Vec<FindingRecord<'_>> = reports
            .iter()
            .flat_map(|report| {
                report
                    .findings()
                    .iter()
                    .map(move |f| FindingRecord::new(report.source(), f, report.verbosity()))
            })
            .collect();
        serde_json::to_string_pretty(&records).unwrap_or_default()
    }
}
