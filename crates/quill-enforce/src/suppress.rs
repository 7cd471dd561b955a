use std::collections::BTreeSet;

use quill_core::{ErrorCode, NoqaIndex, QuillConfig};

/// Decides which findings must never be created for one unit.
///
/// Three tiers compose in a fixed order:
/// - global: the config's ignore list (and codes disabled by default)
/// - per-unit: a noqa entry with no names silences the whole code
/// - per-name: a noqa entry with names silences just those items
#[derive(Debug, Clone, Copy)]
pub struct Suppression<'a> {
    config: &'a QuillConfig,
    noqa: &'a NoqaIndex,
}

impl<'a> Suppression<'a> {
    pub fn new(config: &'a QuillConfig, noqa: &'a NoqaIndex) -> Self {
        Self { config, noqa }
    }

    /// True if every instance of `code` is dropped for this unit.
    pub fn is_kind_suppressed(&self, code: ErrorCode) -> bool {
        self.config.is_ignored(code) || self.noqa.is_fully_suppressed(code)
    }

    /// Remove suppressed names from `names`.
    pub fn filter_suppressed<'n>(
        &self,
        code: ErrorCode,
        names: BTreeSet<&'n str>,
    ) -> BTreeSet<&'n str> {
        if self.is_kind_suppressed(code) {
            return BTreeSet::new();
        }
        match self.noqa.get(code) {
            Some(targets) if !targets.is_empty() => names
                .into_iter()
                .filter(|name| !targets.contains(*name))
                .collect(),
            _ => names,
        }
    }

    pub fn is_name_suppressed(&self, code: ErrorCode, name: &str) -> bool {
        self.is_kind_suppressed(code) || self.noqa.get(code).is_some_and(|t| t.contains(name))
    }
}
