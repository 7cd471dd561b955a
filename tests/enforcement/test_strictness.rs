// Tests for strictness short-circuits

use quill_core::{DocShape, DocView, QuillConfig, Strictness};

use super::common::{run_check, unit};

fn shaped(shape: DocShape) -> DocView {
    DocView {
        shape,
        ..Default::default()
    }
}

fn findings_for(strictness: Strictness, shape: DocShape) -> usize {
    let config = QuillConfig {
        strictness,
        ..Default::default()
    };
    run_check(config, vec![(unit("cons", 1, &["x", "l"]), shaped(shape))]).len()
}

#[test]
fn test_short_strictness_accepts_one_liner() {
    assert_eq!(findings_for(Strictness::ShortDescription, DocShape::ShortOnly), 0);
}

#[test]
fn test_short_strictness_checks_longer_docstrings() {
    assert_eq!(findings_for(Strictness::ShortDescription, DocShape::ShortAndLong), 2);
    assert_eq!(findings_for(Strictness::ShortDescription, DocShape::Sectioned), 2);
}

#[test]
fn test_long_strictness_accepts_summary_and_body() {
    assert_eq!(findings_for(Strictness::LongDescription, DocShape::ShortOnly), 0);
    assert_eq!(findings_for(Strictness::LongDescription, DocShape::ShortAndLong), 0);
    assert_eq!(findings_for(Strictness::LongDescription, DocShape::Sectioned), 2);
}

#[test]
fn test_full_strictness_checks_everything() {
    assert_eq!(findings_for(Strictness::FullDescription, DocShape::ShortOnly), 2);
}
