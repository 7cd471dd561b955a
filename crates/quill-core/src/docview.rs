//! Structured form of a unit's documentation, as produced by a parser.
//!
//! The checker only reads these views. Item names may repeat; checks treat
//! them as sets.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::codes::ErrorCode;
use crate::config::Strictness;
use crate::types::LineRange;

/// A named entry of a section, e.g. one documented argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocItem {
    pub name: String,
    #[serde(default)]
    pub type_hint: Option<String>,
    #[serde(default)]
    pub lines: Option<LineRange>,
}

impl DocItem {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_hint: None,
            lines: None,
        }
    }

    pub fn typed(name: &str, type_hint: &str) -> Self {
        Self {
            type_hint: Some(type_hint.to_string()),
            ..Self::new(name)
        }
    }

    pub fn at(mut self, lines: LineRange) -> Self {
        self.lines = Some(lines);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub lines: Option<LineRange>,
    #[serde(default)]
    pub items: Vec<DocItem>,
    /// Section-level type annotations (Returns/Yields).
    #[serde(default)]
    pub types: Vec<String>,
}

impl DocSection {
    pub fn is_present(&self) -> bool {
        self.present || !self.items.is_empty()
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }

    /// Range to report against when no item-specific range applies.
    pub fn default_lines(&self) -> LineRange {
        self.lines.unwrap_or_default()
    }

    /// Range of the first item called `name`, falling back to the section.
    pub fn item_lines(&self, name: &str) -> LineRange {
        self.items
            .iter()
            .find(|i| i.name == name)
            .and_then(|i| i.lines)
            .unwrap_or_else(|| self.default_lines())
    }

    /// The one declared type, or `None` when zero or several are declared.
    pub fn single_type(&self) -> Option<&str> {
        match self.types.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

/// How much of the docstring is present, for strictness short-circuits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocShape {
    ShortOnly,
    ShortAndLong,
    #[default]
    Sectioned,
}

/// Inline suppressions (`# noqa: DAR101 x`), per error code.
///
/// An empty name set suppresses every instance of the code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoqaIndex(BTreeMap<ErrorCode, BTreeSet<String>>);

impl NoqaIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress_all(&mut self, code: ErrorCode) {
        self.0.insert(code, BTreeSet::new());
    }

    /// Suppress `code` for the given names. A code that is already fully
    /// suppressed stays that way.
    pub fn suppress_names<'a>(&mut self, code: ErrorCode, names: impl IntoIterator<Item = &'a str>) {
        if self.is_fully_suppressed(code) {
            return;
        }
        let entry = self.0.entry(code).or_default();
        entry.extend(names.into_iter().map(str::to_string));
    }

    pub fn get(&self, code: ErrorCode) -> Option<&BTreeSet<String>> {
        self.0.get(&code)
    }

    pub fn is_fully_suppressed(&self, code: ErrorCode) -> bool {
        self.0.get(&code).is_some_and(BTreeSet::is_empty)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Style violation found while parsing; reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleFinding {
    pub code: ErrorCode,
    #[serde(default)]
    pub lines: Option<LineRange>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocView {
    #[serde(default)]
    pub arguments: DocSection,
    #[serde(default)]
    pub returns: DocSection,
    #[serde(default)]
    pub yields: DocSection,
    #[serde(default)]
    pub raises: DocSection,
    #[serde(default)]
    pub variables: DocSection,
    #[serde(default)]
    pub shape: DocShape,
    #[serde(default)]
    pub noqa: NoqaIndex,
    /// Bare `# noqa` or `# noqa: *`: skip the unit entirely.
    #[serde(default)]
    pub ignore_all: bool,
    #[serde(default)]
    pub style_findings: Vec<StyleFinding>,
}

impl DocView {
    /// Whether the docstring already meets a relaxed strictness level.
    /// Full strictness is never satisfied early.
    pub fn satisfies(&self, strictness: Strictness) -> bool {
        match strictness {
            Strictness::ShortDescription => self.shape == DocShape::ShortOnly,
            Strictness::LongDescription => {
                matches!(self.shape, DocShape::ShortOnly | DocShape::ShortAndLong)
            }
            Strictness::FullDescription => false,
        }
    }
}
