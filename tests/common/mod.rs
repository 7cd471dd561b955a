/// Shared test helpers for all quill integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
pub mod generators;

use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use quill_core::parser::{ParserSet, ViewTable};
use quill_core::{DocItem, DocSection, DocView, Finding, LineRange, Parameter, QuillConfig, Unit};
use quill_enforce::IntegrityChecker;

/// A documented unit whose docstring starts on the line after `line`.
#[allow(dead_code)]
pub fn unit(name: &str, line: u32, params: &[&str]) -> Unit {
    Unit {
        name: name.to_string(),
        line,
        doc_line: line + 1,
        parameters: params.iter().map(|p| Parameter::new(p)).collect(),
        docstring: Some(format!("Summary of {}.\n\nArgs:\n    ...\n", name)),
        ..Default::default()
    }
}

/// An arguments section listing `items` as (name, type) pairs, one per
/// line after the `Args:` header.
#[allow(dead_code)]
pub fn arguments(items: &[(&str, Option<&str>)]) -> DocSection {
    DocSection {
        present: !items.is_empty(),
        lines: Some(LineRange::new(2, 2 + items.len() as u32)),
        items: items
            .iter()
            .enumerate()
            .map(|(i, (name, ty))| {
                let item = match ty {
                    Some(ty) => DocItem::typed(name, ty),
                    None => DocItem::new(name),
                };
                item.at(LineRange::single(3 + i as u32))
            })
            .collect(),
        types: vec![],
    }
}

/// Arguments documented with a type, so only name checks can fire.
#[allow(dead_code)]
pub fn view_with_args(names: &[&str]) -> DocView {
    let items: Vec<(&str, Option<&str>)> = names.iter().map(|n| (*n, Some("object"))).collect();
    DocView {
        arguments: arguments(&items),
        ..Default::default()
    }
}

/// Build a checker whose parser serves exactly the given views.
#[allow(dead_code)]
pub fn checker(config: QuillConfig, entries: &[(Unit, DocView)]) -> IntegrityChecker {
    let mut table = ViewTable::new(config.style);
    for (unit, view) in entries {
        table.insert(unit, view.clone());
    }
    let parsers = ParserSet::new().with(Arc::new(table));
    IntegrityChecker::new(config, &parsers).unwrap()
}

/// Schedule every entry and finalize.
#[allow(dead_code)]
pub fn run_check(config: QuillConfig, entries: Vec<(Unit, DocView)>) -> Arc<[Finding]> {
    let checker = checker(config, &entries);
    for (unit, _) in entries {
        checker.schedule(unit).unwrap();
    }
    checker.finalize().unwrap()
}

/// Get path to compiled quill binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn quill_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("quill");
    if !path.exists() {
        let status = Command::new("cargo")
            .args(["build", "-p", "quill-cli"])
            .status()
            .expect("Failed to build quill");
        assert!(status.success(), "Failed to build quill binary");
    }
    path
}
