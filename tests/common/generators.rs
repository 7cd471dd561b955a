/// Unit generators for benchmarks and large-scale tests.
use quill_core::{DocItem, DocSection, DocView, LineRange, Parameter, Unit};

/// Generate `count` units spaced `spacing` lines apart. Every unit documents
/// its first argument under the wrong type and omits its second, so each
/// yields exactly two findings (DAR101, DAR103).
#[allow(dead_code)]
pub fn generate_units(count: usize, spacing: u32) -> Vec<(Unit, DocView)> {
    generate(count, spacing, "int")
}

/// Like [`generate_units`], but the first argument's documented type matches,
/// so each unit yields exactly one finding (DAR101 for `extra`).
#[allow(dead_code)]
pub fn generate_single_finding_units(count: usize, spacing: u32) -> Vec<(Unit, DocView)> {
    generate(count, spacing, "str")
}

fn generate(count: usize, spacing: u32, doc_type: &str) -> Vec<(Unit, DocView)> {
    (0..count)
        .map(|i| {
            let line = 1 + i as u32 * spacing;
            let unit = Unit {
                name: format!("func_{i}"),
                line,
                doc_line: line + 1,
                parameters: vec![Parameter::typed("arg", "str"), Parameter::new("extra")],
                has_return: true,
                docstring: Some(format!(
                    "Do thing {i}.\n\nArgs:\n    arg ({doc_type}): The input.\n\nReturns:\n    The input.\n"
                )),
                ..Default::default()
            };
            let view = DocView {
                arguments: DocSection {
                    present: true,
                    lines: Some(LineRange::new(2, 3)),
                    items: vec![DocItem::typed("arg", doc_type).at(LineRange::single(3))],
                    types: vec![],
                },
                returns: DocSection {
                    present: true,
                    lines: Some(LineRange::new(5, 6)),
                    ..Default::default()
                },
                ..Default::default()
            };
            (unit, view)
        })
        .collect()
}
