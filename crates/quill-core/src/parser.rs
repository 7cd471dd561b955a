use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DocstringStyle;
use crate::docview::DocView;
use crate::error::{ConfigError, ParseError};
use crate::types::Unit;

/// Documentation parser for one docstring style.
///
/// Implementors must be `Send + Sync` so the checker can share them across
/// its worker pool.
pub trait DocstringParser: Send + Sync {
    fn style(&self) -> DocstringStyle;

    /// Build the structured view of `docstring`, which belongs to `unit`.
    fn parse(&self, unit: &Unit, docstring: &str) -> Result<DocView, ParseError>;
}

/// Parsers keyed by the style they handle.
#[derive(Default, Clone)]
pub struct ParserSet {
    parsers: HashMap<DocstringStyle, Arc<dyn DocstringParser>>,
}

impl ParserSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `parser` for its style, replacing any earlier one.
    pub fn register(&mut self, parser: Arc<dyn DocstringParser>) -> &mut Self {
        self.parsers.insert(parser.style(), parser);
        self
    }

    pub fn with(mut self, parser: Arc<dyn DocstringParser>) -> Self {
        self.register(parser);
        self
    }

    /// Pick the parser for `style`. Done once per checker.
    pub fn select(&self, style: DocstringStyle) -> Result<Arc<dyn DocstringParser>, ConfigError> {
        self.parsers
            .get(&style)
            .cloned()
            .ok_or(ConfigError::UnsupportedStyle(style))
    }

    pub fn styles(&self) -> Vec<DocstringStyle> {
        let mut styles: Vec<_> = self.parsers.keys().copied().collect();
        styles.sort_by_key(|s| s.as_str());
        styles
    }
}

impl std::fmt::Debug for ParserSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserSet")
            .field("styles", &self.styles())
            .finish()
    }
}

/// Serves views that a parser already produced, keyed by unit name and
/// definition line. Used to feed collaborator output (e.g. JSON) into the
/// checker.
#[derive(Debug, Clone)]
pub struct ViewTable {
    style: DocstringStyle,
    views: HashMap<(String, u32), DocView>,
}

impl ViewTable {
    pub fn new(style: DocstringStyle) -> Self {
        Self {
            style,
            views: HashMap::new(),
        }
    }

    pub fn insert(&mut self, unit: &Unit, view: DocView) {
        self.views.insert((unit.name.clone(), unit.line), view);
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl DocstringParser for ViewTable {
    fn style(&self) -> DocstringStyle {
        self.style
    }

    fn parse(&self, unit: &Unit, _docstring: &str) -> Result<DocView, ParseError> {
        self.views
            .get(&(unit.name.clone(), unit.line))
            .cloned()
            .ok_or_else(|| ParseError::MissingView {
                name: unit.name.clone(),
                line: unit.line,
            })
    }
}
