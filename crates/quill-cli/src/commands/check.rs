//! `quill check`: run the integrity checker over collaborator output.
//!
//! Each input file is a JSON document produced by the source analyzer and
//! docstring parser:
//!
//! ```json
//! { "source": "pkg/mod.py",
//!   "units": [ { "unit": { "name": "f", "line": 3, ... },
//!                "view": { "arguments": { ... }, ... } } ] }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use quill_core::parser::{ParserSet, ViewTable};
use quill_core::{ConfigError, DocView, DocstringStyle, ErrorCode, QuillConfig, Strictness, Unit};
use quill_enforce::{CheckerError, IntegrityChecker};
use quill_output::{ErrorReport, ReportFormatter, Verbosity};

/// One analyzed source file.
#[derive(Debug, Deserialize)]
pub struct SourceFile {
    pub source: String,
    #[serde(default)]
    pub units: Vec<DocumentedUnit>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentedUnit {
    pub unit: Unit,
    /// Absent when the parser produced nothing for this unit.
    #[serde(default)]
    pub view: Option<DocView>,
}

/// Command-line values that override the policy file.
#[derive(Debug, Default)]
pub struct CheckOverrides {
    pub style: Option<DocstringStyle>,
    pub strictness: Option<Strictness>,
    pub ignore: Vec<String>,
    pub message_template: Option<String>,
    pub raise_errors: bool,
    pub workers: Option<usize>,
}

/// Run `quill check <files>...`. Returns the process exit code.
pub fn run(
    formatter: &dyn ReportFormatter,
    config_path: &Path,
    files: &[PathBuf],
    overrides: CheckOverrides,
    verbosity: u8,
) -> i32 {
    let verbosity = match Verbosity::try_from(verbosity) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("quill check: {}", e);
            return 2;
        }
    };

    let config = match QuillConfig::load(config_path).and_then(|c| apply_overrides(c, overrides)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("quill check: {}", e);
            return 2;
        }
    };

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let source = match load_source(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("quill check: {}", e);
                return 2;
            }
        };
        match check_source(&config, source, verbosity) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("quill check: {}: {}", path.display(), e);
                return 2;
            }
        }
    }

    let output = formatter.format_reports(&reports);
    if !output.is_empty() {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    if reports.iter().all(ErrorReport::is_empty) {
        0
    } else {
        1
    }
}

/// Fold command-line values into the loaded policy.
pub fn apply_overrides(
    mut config: QuillConfig,
    overrides: CheckOverrides,
) -> Result<QuillConfig, ConfigError> {
    if let Some(style) = overrides.style {
        config.style = style;
    }
    if let Some(strictness) = overrides.strictness {
        config.strictness = strictness;
    }
    for raw in &overrides.ignore {
        config.ignore.insert(ErrorCode::from_str(raw.trim())?);
    }
    if overrides.message_template.is_some() {
        config.message_template = overrides.message_template;
    }
    if overrides.raise_errors {
        config.raise_errors = true;
    }
    if overrides.workers.is_some() {
        config.workers = overrides.workers;
    }
    Ok(config)
}

pub fn load_source(path: &Path) -> Result<SourceFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}

/// Check every unit of one source file and build its report.
pub fn check_source(
    config: &QuillConfig,
    source: SourceFile,
    verbosity: Verbosity,
) -> Result<ErrorReport, CheckerError> {
    let mut table = ViewTable::new(config.style);
    let mut units = Vec::with_capacity(source.units.len());
    for entry in source.units {
        if let Some(view) = entry.view {
            table.insert(&entry.unit, view);
        }
        units.push(entry.unit);
    }
    debug!(source = %source.source, units = units.len(), views = table.len(), "loaded source");

    let parsers = ParserSet::new().with(Arc::new(table));
    let checker = IntegrityChecker::new(config.clone(), &parsers)?;
    for unit in units {
        checker.schedule(unit)?;
    }
    checker.finalize_and_report(verbosity, &source.source, None)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
