use std::collections::BTreeSet;

use quill_core::{ErrorCode, Finding};

use crate::checks_util::{documented_types, named_findings, Check, CheckContext};

// Re-export DAR2xx-DAR5xx and style checks so the battery reads as one list
pub use crate::checks_extended::{
    check_raises, check_return, check_return_type, check_style, check_variables, check_yield,
};

/// Every check, in the order findings are discovered for a unit.
pub const BATTERY: [Check; 9] = [
    Check { name: "parameters", run: check_parameters },
    Check { name: "parameter_types", run: check_parameter_types },
    Check { name: "parameter_types_missing", run: check_parameter_types_missing },
    Check { name: "return", run: check_return },
    Check { name: "return_type", run: check_return_type },
    Check { name: "yield", run: check_yield },
    Check { name: "raises", run: check_raises },
    Check { name: "variables", run: check_variables },
    Check { name: "style", run: check_style },
];

/// DAR101 / DAR102: parameter names in the signature vs. the docstring.
///
/// Missing parameters have no line of their own and are reported against
/// the arguments section; excess ones point at the documented item.
pub fn check_parameters(ctx: &CheckContext<'_>) -> Vec<Finding> {
    let section = &ctx.view.arguments;
    let documented = section.names();
    let actual: BTreeSet<&str> = ctx.unit.parameter_names().collect();

    let missing = actual.difference(&documented).copied().collect();
    let excess = documented.difference(&actual).copied().collect();

    let mut findings = named_findings(ctx, ErrorCode::MissingParameter, missing, |_| {
        section.default_lines()
    });
    findings.extend(named_findings(ctx, ErrorCode::ExcessParameter, excess, |name| {
        section.item_lines(name)
    }));
    findings
}

/// DAR103: declared parameter type differs from the documented one.
///
/// Only evaluated when both sides declare a type. `expected` carries the
/// code's annotation, `actual` the docstring's.
pub fn check_parameter_types(ctx: &CheckContext<'_>) -> Vec<Finding> {
    let code = ErrorCode::ParameterTypeMismatch;
    if ctx.suppression.is_kind_suppressed(code) {
        return Vec::new();
    }
    let section = &ctx.view.arguments;
    let documented = documented_types(section);

    ctx.unit
        .parameters
        .iter()
        .filter_map(|param| {
            let expected = param.annotation.as_deref()?;
            let actual = documented.get(param.name.as_str()).copied().flatten()?;
            if expected == actual || ctx.suppression.is_name_suppressed(code, &param.name) {
                return None;
            }
            Some(
                Finding::new(code, ctx.unit, section.item_lines(&param.name))
                    .with_name(&param.name)
                    .with_types(expected, actual),
            )
        })
        .collect()
}

/// DAR104: documented argument without a documented type, whether or not
/// the code annotates it.
pub fn check_parameter_types_missing(ctx: &CheckContext<'_>) -> Vec<Finding> {
    let section = &ctx.view.arguments;
    let untyped = documented_types(section)
        .into_iter()
        .filter(|(_, ty)| ty.is_none())
        .map(|(name, _)| name)
        .collect();
    named_findings(ctx, ErrorCode::ParameterTypeMissing, untyped, |name| {
        section.item_lines(name)
    })
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
