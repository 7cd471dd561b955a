// Tests for concurrent scheduling and deterministic finalize output

use std::sync::Arc;

use quill_core::{ErrorCode, QuillConfig};
use quill_output::Verbosity;

use super::common::checker;
use super::common::generators::{generate_single_finding_units, generate_units};

fn schedule_from_threads(
    checker: &quill_enforce::IntegrityChecker,
    entries: &[(quill_core::Unit, quill_core::DocView)],
) {
    std::thread::scope(|scope| {
        for chunk in entries.chunks(10) {
            scope.spawn(move || {
                for (unit, _) in chunk {
                    checker.schedule(unit.clone()).unwrap();
                }
            });
        }
    });
}

#[test]
fn test_hundred_units_from_many_threads() {
    let mut entries = generate_single_finding_units(100, 7);
    entries.reverse();
    let config = QuillConfig {
        workers: Some(8),
        ..Default::default()
    };
    let checker = checker(config, &entries);
    schedule_from_threads(&checker, &entries);

    let findings = checker.finalize().unwrap();
    assert_eq!(findings.len(), 100);
    assert!(findings.windows(2).all(|w| w[0].unit.line < w[1].unit.line));
    assert!(findings
        .iter()
        .all(|f| f.code == ErrorCode::MissingParameter && f.name.as_deref() == Some("extra")));
    assert_eq!(findings[0].unit.name, "func_0");
    assert_eq!(findings[99].unit.name, "func_99");
}

#[test]
fn test_battery_order_holds_within_each_unit() {
    let mut entries = generate_units(40, 5);
    entries.reverse();
    let config = QuillConfig {
        workers: Some(4),
        ..Default::default()
    };
    let checker = checker(config, &entries);
    schedule_from_threads(&checker, &entries);

    let findings = checker.finalize().unwrap();
    assert_eq!(findings.len(), 80);
    assert!(findings
        .chunks(2)
        .all(|pair| pair[0].unit.name == pair[1].unit.name));
}

#[test]
fn test_report_is_identical_across_runs() {
    let render = |workers: usize| {
        let entries = generate_units(50, 3);
        let config = QuillConfig {
            workers: Some(workers),
            ..Default::default()
        };
        let checker = checker(config, &entries);
        for (unit, _) in entries {
            checker.schedule(Arc::new(unit)).unwrap();
        }
        checker
            .finalize_and_report(Verbosity::High, "gen.py", None)
            .unwrap()
            .to_string()
    };
    let single = render(1);
    assert_eq!(single, render(6));
    assert!(!single.is_empty());
}

#[test]
fn test_finalize_twice_same_findings() {
    let entries = generate_units(10, 4);
    let checker = checker(QuillConfig::default(), &entries);
    for (unit, _) in entries {
        checker.schedule(unit).unwrap();
    }
    let first = checker.finalize().unwrap();
    let second = checker.finalize().unwrap();
    assert_eq!(first, second);
    assert!(checker.schedule(quill_core::Unit::default()).is_err());
}
