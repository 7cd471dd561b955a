// Tests for parameter presence and type checks (DAR101-DAR104)

use quill_core::{DocView, ErrorCode, Parameter, QuillConfig};

use super::common::{arguments, run_check, unit, view_with_args};

#[test]
fn test_matching_parameters_are_clean() {
    let findings = run_check(
        QuillConfig::default(),
        vec![(unit("add", 1, &["a", "b"]), view_with_args(&["b", "a"]))],
    );
    assert!(findings.is_empty());
}

#[test]
fn test_missing_and_excess_parameters() {
    let findings = run_check(
        QuillConfig::default(),
        vec![(unit("add", 1, &["a", "b"]), view_with_args(&["a", "c"]))],
    );
    let summary: Vec<(ErrorCode, Option<&str>)> = findings
        .iter()
        .map(|f| (f.code, f.name.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ErrorCode::MissingParameter, Some("b")),
            (ErrorCode::ExcessParameter, Some("c")),
        ]
    );
}

#[test]
fn test_excess_parameter_points_at_item() {
    let findings = run_check(
        QuillConfig::default(),
        vec![(unit("add", 10, &["a"]), view_with_args(&["a", "c"]))],
    );
    // Item "c" sits on docstring offset 4; the docstring starts on line 11.
    assert_eq!(findings[0].start_line(), 15);
}

#[test]
fn test_type_mismatch_reports_code_then_doc_type() {
    let mut u = unit("scale", 1, &[]);
    u.parameters = vec![Parameter::typed("x", "int")];
    let view = DocView {
        arguments: arguments(&[("x", Some("str"))]),
        ..Default::default()
    };
    let findings = run_check(QuillConfig::default(), vec![(u, view)]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, ErrorCode::ParameterTypeMismatch);
    assert_eq!(findings[0].expected.as_deref(), Some("int"));
    assert_eq!(findings[0].actual.as_deref(), Some("str"));
    assert_eq!(
        findings[0].terse_message(),
        "~x: expected int but was str"
    );
}

#[test]
fn test_type_mismatch_reverse_direction() {
    let mut u = unit("scale", 1, &[]);
    u.parameters = vec![Parameter::typed("x", "str")];
    let view = DocView {
        arguments: arguments(&[("x", Some("int"))]),
        ..Default::default()
    };
    let findings = run_check(QuillConfig::default(), vec![(u, view)]);
    assert_eq!(findings[0].expected.as_deref(), Some("str"));
    assert_eq!(findings[0].actual.as_deref(), Some("int"));
}

#[test]
fn test_one_sided_types_are_not_compared() {
    let mut u = unit("scale", 1, &[]);
    u.parameters = vec![Parameter::typed("x", "int"), Parameter::new("y")];
    let view = DocView {
        arguments: arguments(&[("x", None), ("y", Some("float"))]),
        ..Default::default()
    };
    let findings = run_check(QuillConfig::default(), vec![(u, view)]);
    // Only the untyped documentation of x is flagged; no mismatch.
    let summary: Vec<(ErrorCode, Option<&str>)> = findings
        .iter()
        .map(|f| (f.code, f.name.as_deref()))
        .collect();
    assert_eq!(summary, vec![(ErrorCode::ParameterTypeMissing, Some("x"))]);
}

#[test]
fn test_missing_type_reported_by_default() {
    let entries = || {
        let view = DocView {
            arguments: arguments(&[("x", None)]),
            ..Default::default()
        };
        vec![(unit("f", 1, &["x"]), view)]
    };
    let findings = run_check(QuillConfig::default(), entries());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, ErrorCode::ParameterTypeMissing);
    assert_eq!(findings[0].terse_message(), "-t x");

    let mut config = QuillConfig::default();
    config.ignore.insert(ErrorCode::ParameterTypeMissing);
    assert!(run_check(config, entries()).is_empty());
}
