// Tests for message templates applied through the checker

use quill_core::{ConfigError, QuillConfig};
use quill_enforce::CheckerError;
use quill_output::Verbosity;

use super::common::{checker, unit, view_with_args};

fn report(config: QuillConfig, template: Option<&str>) -> Result<String, CheckerError> {
    let entries = vec![(unit("cons", 4, &["x", "l"]), view_with_args(&["l"]))];
    let checker = checker(config, &entries);
    for (unit, _) in entries {
        checker.schedule(unit)?;
    }
    checker
        .finalize_and_report(Verbosity::Low, "lists.py", template)
        .map(|r| r.to_string())
}

#[test]
fn test_default_template() {
    let out = report(QuillConfig::default(), None).unwrap();
    assert_eq!(out, "lists.py:cons:7: DAR101: - x\n");
}

#[test]
fn test_configured_template() {
    let config = QuillConfig {
        message_template: Some("{msg_id}@{line}-{end_line} {name}".into()),
        ..Default::default()
    };
    assert_eq!(report(config, None).unwrap(), "DAR101@7-8 x\n");
}

#[test]
fn test_override_template_with_escapes() {
    let out = report(QuillConfig::default(), Some("{{{obj}}} {msg}")).unwrap();
    assert_eq!(out, "{cons} - x\n");
}

#[test]
fn test_unknown_placeholder_rejected() {
    let err = report(QuillConfig::default(), Some("{path} {colour}")).unwrap_err();
    assert!(matches!(
        err,
        CheckerError::Config(ConfigError::UnknownPlaceholder(ref p)) if p == "colour"
    ));
}
