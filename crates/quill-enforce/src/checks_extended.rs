use std::collections::BTreeSet;

use quill_core::{ErrorCode, Finding};

use crate::checks_util::{named_findings, presence_findings, CheckContext};

/// DAR201 / DAR202: return statement vs. returns section.
pub fn check_return(ctx: &CheckContext<'_>) -> Vec<Finding> {
    presence_findings(
        ctx,
        ctx.unit.has_return,
        &ctx.view.returns,
        ErrorCode::MissingReturn,
        ErrorCode::ExcessReturn,
    )
}

/// DAR203: return annotation vs. the single documented return type.
///
/// Several documented return types leave nothing to compare against, so the
/// check is skipped rather than flagged.
pub fn check_return_type(ctx: &CheckContext<'_>) -> Vec<Finding> {
    let code = ErrorCode::ReturnTypeMismatch;
    if ctx.suppression.is_kind_suppressed(code) {
        return Vec::new();
    }
    let section = &ctx.view.returns;
    let (Some(expected), Some(actual)) = (ctx.unit.return_type.as_deref(), section.single_type())
    else {
        return Vec::new();
    };
    if expected == actual {
        return Vec::new();
    }
    vec![Finding::new(code, ctx.unit, section.default_lines()).with_types(expected, actual)]
}

/// DAR301 / DAR302: yield vs. yields section.
pub fn check_yield(ctx: &CheckContext<'_>) -> Vec<Finding> {
    presence_findings(
        ctx,
        ctx.unit.has_yield,
        &ctx.view.yields,
        ErrorCode::MissingYield,
        ErrorCode::ExcessYield,
    )
}

/// DAR401 / DAR402: raised exceptions vs. the raises section.
pub fn check_raises(ctx: &CheckContext<'_>) -> Vec<Finding> {
    let section = &ctx.view.raises;
    let documented = section.names();
    let actual: BTreeSet<&str> = ctx.unit.raises.iter().map(String::as_str).collect();

    let missing = actual
        .difference(&documented)
        .copied()
        .filter(|name| !ctx.config.ignore_raise.contains(*name))
        .collect();
    let excess = documented.difference(&actual).copied().collect();

    let mut findings = named_findings(ctx, ErrorCode::MissingRaise, missing, |_| {
        section.default_lines()
    });
    findings.extend(named_findings(ctx, ErrorCode::ExcessRaise, excess, |name| {
        section.item_lines(name)
    }));
    findings
}

/// DAR501: documented variables that the body never defines.
///
/// Runs only for styles with a variables section unless the config forces
/// it either way. There is no "missing variable" counterpart.
pub fn check_variables(ctx: &CheckContext<'_>) -> Vec<Finding> {
    if !ctx.config.variables_checked() {
        return Vec::new();
    }
    let section = &ctx.view.variables;
    let actual: BTreeSet<&str> = ctx.unit.variables.iter().map(String::as_str).collect();
    let excess = section.names().difference(&actual).copied().collect();
    named_findings(ctx, ErrorCode::ExcessVariable, excess, |name| {
        section.item_lines(name)
    })
}

/// DAR0xx: route the parser's style findings into the report.
pub fn check_style(ctx: &CheckContext<'_>) -> Vec<Finding> {
    ctx.view
        .style_findings
        .iter()
        .filter(|style| !ctx.suppression.is_kind_suppressed(style.code))
        .map(|style| {
            Finding::new(style.code, ctx.unit, style.lines.unwrap_or_default())
                .with_detail(style.detail.as_deref())
        })
        .collect()
}
