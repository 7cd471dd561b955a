use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::codes::ErrorCode;

/// Inclusive range of 0-based line offsets, relative to the first line of
/// the docstring text. `end` is never before `start`, including after
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLineRange")]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

#[derive(Deserialize)]
struct RawLineRange {
    start: u32,
    end: u32,
}

impl From<RawLineRange> for LineRange {
    fn from(raw: RawLineRange) -> Self {
        LineRange::new(raw.start, raw.end)
    }
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn single(line: u32) -> Self {
        Self::new(line, line)
    }
}

/// A declared parameter of a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<String>,
}

impl Parameter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            annotation: None,
        }
    }

    pub fn typed(name: &str, annotation: &str) -> Self {
        Self {
            name: name.to_string(),
            annotation: Some(annotation.to_string()),
        }
    }
}

/// A documented callable as extracted by the source analyzer.
///
/// Units are produced once per processing run and never mutated by the
/// checker; findings share them through an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    /// 1-based line of the definition. Reports are ordered by it.
    pub line: u32,
    /// 1-based line where the docstring text starts.
    #[serde(default)]
    pub doc_line: u32,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub has_return: bool,
    #[serde(default)]
    pub has_yield: bool,
    #[serde(default)]
    pub raises: BTreeSet<String>,
    #[serde(default)]
    pub variables: BTreeSet<String>,
    #[serde(default)]
    pub docstring: Option<String>,
}

impl Unit {
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Absolute line for an offset inside the docstring.
    pub fn absolute_line(&self, offset: u32) -> u32 {
        let base = if self.doc_line > 0 { self.doc_line } else { self.line };
        base.saturating_add(offset)
    }
}

/// One inconsistency between a unit and its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub code: ErrorCode,
    pub unit: Arc<Unit>,
    pub name: Option<String>,
    /// For mismatches: the type declared in code.
    pub expected: Option<String>,
    /// For mismatches: the type declared in the docstring.
    pub actual: Option<String>,
    /// Parser-supplied detail for style findings.
    pub detail: Option<String>,
    pub lines: LineRange,
}

impl Finding {
    pub fn new(code: ErrorCode, unit: &Arc<Unit>, lines: LineRange) -> Self {
        Self {
            code,
            unit: Arc::clone(unit),
            name: None,
            expected: None,
            actual: None,
            detail: None,
            lines,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_types(mut self, expected: &str, actual: &str) -> Self {
        self.expected = Some(expected.to_string());
        self.actual = Some(actual.to_string());
        self
    }

    pub fn with_detail(mut self, detail: Option<&str>) -> Self {
        self.detail = detail.map(str::to_string);
        self
    }

    /// Short form of the message, e.g. `- x` or `+v pi`.
    pub fn terse_message(&self) -> String {
        let name = self.name.as_deref().unwrap_or("");
        let expected = self.expected.as_deref().unwrap_or("");
        let actual = self.actual.as_deref().unwrap_or("");
        let detail = self.detail.as_deref().or(self.name.as_deref()).unwrap_or("");
        match self.code {
            ErrorCode::GenericSyntax => format!("s {}", detail).trim_end().to_string(),
            ErrorCode::EmptyDescription | ErrorCode::EmptyType => {
                format!("e {}", detail).trim_end().to_string()
            }
            ErrorCode::Indentation | ErrorCode::ExcessBlankLine => "~<".to_string(),
            ErrorCode::MissingParameter => format!("- {}", name),
            ErrorCode::ExcessParameter => format!("+ {}", name),
            ErrorCode::ParameterTypeMismatch => {
                format!("~{}: expected {} but was {}", name, expected, actual)
            }
            ErrorCode::ParameterTypeMissing => format!("-t {}", name),
            ErrorCode::MissingReturn => "- return".to_string(),
            ErrorCode::ExcessReturn => "+ return".to_string(),
            ErrorCode::ReturnTypeMismatch => {
                format!("~Return: expected {} but was {}", expected, actual)
            }
            ErrorCode::MissingYield => "- yield".to_string(),
            ErrorCode::ExcessYield => "+ yield".to_string(),
            ErrorCode::MissingRaise => format!("-r {}", name),
            ErrorCode::ExcessRaise => format!("+r {}", name),
            ErrorCode::ExcessVariable => format!("+v {}", name),
        }
    }

    /// General message followed by the terse form.
    pub fn full_message(&self) -> String {
        format!("{}: {}", self.code.general_message(), self.terse_message())
    }

    pub fn start_line(&self) -> u32 {
        self.unit.absolute_line(self.lines.start)
    }

    pub fn end_line(&self) -> u32 {
        self.unit.absolute_line(self.lines.end)
    }
}
