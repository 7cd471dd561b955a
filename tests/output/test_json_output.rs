// Tests for JSON report output

use quill_core::QuillConfig;
use quill_output::json::JsonFormatter;
use quill_output::{ErrorReport, ReportFormatter, Verbosity};

use super::common::generators::generate_units;
use super::common::run_check;

#[test]
fn test_json_records_are_sorted_and_complete() {
    let mut entries = generate_units(3, 10);
    entries.reverse();
    let findings = run_check(QuillConfig::default(), entries);
    let report = ErrorReport::new(findings, Verbosity::Low, "gen.py", None);
    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 6);

    let lines: Vec<u64> = records.iter().map(|r| r["line"].as_u64().unwrap()).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);

    let mismatch = records.iter().find(|r| r["code"] == "DAR103").unwrap();
    assert_eq!(mismatch["expected"], "str");
    assert_eq!(mismatch["actual"], "int");
    assert_eq!(mismatch["path"], "gen.py");
}

#[test]
fn test_json_empty_report() {
    let report = ErrorReport::new(
        run_check(QuillConfig::default(), Vec::new()),
        Verbosity::Medium,
        "none.py",
        None,
    );
    assert_eq!(JsonFormatter.format_report(&report), "[]");
}
