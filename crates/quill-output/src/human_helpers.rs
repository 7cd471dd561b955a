use quill_core::template::TemplateValues;
use quill_core::Finding;

use crate::report::{ErrorReport, Verbosity};

pub(crate) fn format_finding_line(report: &ErrorReport, f: &Finding) -> String {
    let msg = match report.verbosity() {
        Verbosity::Low => f.terse_message(),
        Verbosity::Medium | Verbosity::High => f.full_message(),
    };
    report.template().render(&TemplateValues {
        path: report.source(),
        obj: &f.unit.name,
        line: f.start_line(),
        end_line: f.end_line(),
        msg_id: f.code.as_str(),
        msg: &msg,
        name: f.name.as_deref(),
        expected: f.expected.as_deref(),
        actual: f.actual.as_deref(),
    })
}

/// Docstring lines covered by the finding, then a fix hint.
pub(crate) fn format_context(f: &Finding) -> String {
    let mut out = String::new();

    if let Some(doc) = &f.unit.docstring {
        let start = f.lines.start as usize;
        let count = f.lines.end.saturating_sub(f.lines.start) as usize + 1;
        for (offset, text) in doc.lines().enumerate().skip(start).take(count) {
            let line = f.unit.absolute_line(offset as u32);
            out.push_str(&format!("  {:>4} | {}\n", line, text));
        }
    }

    out.push_str(&format!("   = fix: {}\n", f.code.fix_hint()));
    out
}
