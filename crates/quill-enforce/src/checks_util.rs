use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use quill_core::{DocSection, DocView, ErrorCode, Finding, LineRange, QuillConfig, Unit};

use crate::suppress::Suppression;

/// Everything a check may read for one unit.
pub struct CheckContext<'a> {
    pub unit: &'a Arc<Unit>,
    pub view: &'a DocView,
    pub config: &'a QuillConfig,
    pub suppression: Suppression<'a>,
}

impl<'a> CheckContext<'a> {
    pub fn new(unit: &'a Arc<Unit>, view: &'a DocView, config: &'a QuillConfig) -> Self {
        Self {
            unit,
            view,
            config,
            suppression: Suppression::new(config, &view.noqa),
        }
    }
}

pub type CheckFn = fn(&CheckContext<'_>) -> Vec<Finding>;

/// A named entry of the battery.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub run: CheckFn,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// One finding per unsuppressed name, positioned by `lines`.
pub(crate) fn named_findings(
    ctx: &CheckContext<'_>,
    code: ErrorCode,
    names: BTreeSet<&str>,
    lines: impl Fn(&str) -> LineRange,
) -> Vec<Finding> {
    ctx.suppression
        .filter_suppressed(code, names)
        .into_iter()
        .map(|name| Finding::new(code, ctx.unit, lines(name)).with_name(name))
        .collect()
}

/// Compare a code-side boolean against a section's presence.
pub(crate) fn presence_findings(
    ctx: &CheckContext<'_>,
    in_code: bool,
    section: &DocSection,
    missing: ErrorCode,
    excess: ErrorCode,
) -> Vec<Finding> {
    let code = match (in_code, section.is_present()) {
        (true, false) => missing,
        (false, true) => excess,
        _ => return Vec::new(),
    };
    if ctx.suppression.is_kind_suppressed(code) {
        return Vec::new();
    }
    vec![Finding::new(code, ctx.unit, section.default_lines())]
}

/// Documented name → documented type. Later duplicates win.
pub(crate) fn documented_types(section: &DocSection) -> BTreeMap<&str, Option<&str>> {
    section
        .items
        .iter()
        .map(|item| (item.name.as_str(), item.type_hint.as_deref()))
        .collect()
}
