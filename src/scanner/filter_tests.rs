use std::path::Path;

use super::*;

#[test]
fn includes_matching_extension() {
    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("src/main.rs")));
}

#[test]
fn excludes_other_extensions() {
    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    assert!(!filter.should_include(Path::new("notes.md")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn empty_extension_list_includes_everything() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();
    assert!(filter.should_include(Path::new("anything.xyz")));
}

#[test]
fn exclude_patterns_win_over_extensions() {
    let filter = GlobFilter::new(
        vec!["rs".to_string()],
        &["**/generated/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("src/generated/schema.rs")));
}

#[test]
fn invalid_exclude_pattern_is_an_error() {
    let err = GlobFilter::new(vec!["rs".to_string()], &["[".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Invalid glob pattern"));
}
