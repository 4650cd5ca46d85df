use std::path::Path;

use super::*;

fn filter(exclude: &[&str]) -> SpecFileFilter {
    let exclude: Vec<String> = exclude.iter().map(ToString::to_string).collect();
    SpecFileFilter::new(vec!["rb".to_string()], "_spec", &exclude).unwrap()
}

#[test]
fn selects_spec_files_by_extension_and_suffix() {
    let filter = filter(&[]);

    assert!(filter.should_include(Path::new("models/article_spec.rb")));
    assert!(!filter.should_include(Path::new("models/article_spec.py")));
    assert!(!filter.should_include(Path::new("spec_helper.rb")));
    assert!(!filter.should_include(Path::new("support/matchers.rb")));
}

#[test]
fn bare_suffix_is_not_a_spec() {
    assert!(!filter(&[]).should_include(Path::new("_spec.rb")));
}

#[test]
fn multiple_extensions() {
    let filter = SpecFileFilter::new(vec!["rb".to_string(), "rake".to_string()], "_spec", &[]).unwrap();

    assert!(filter.should_include(Path::new("tasks/cleanup_spec.rake")));
    assert!(filter.should_include(Path::new("cleanup_spec.rb")));
}

#[test]
fn custom_suffix() {
    let filter = SpecFileFilter::new(vec!["rb".to_string()], "_test", &[]).unwrap();
    assert!(filter.should_include(Path::new("article_test.rb")));
    assert!(!filter.should_include(Path::new("article_spec.rb")));
}

#[test]
fn exclude_patterns() {
    let filter = filter(&["legacy/**", "**/*_slow_spec.rb"]);

    assert!(filter.should_include(Path::new("models/article_spec.rb")));
    assert!(!filter.should_include(Path::new("legacy/models/article_spec.rb")));
    assert!(!filter.should_include(Path::new("models/import_slow_spec.rb")));
}

#[test]
fn invalid_pattern_returns_error() {
    let result = SpecFileFilter::new(vec![], "_spec", &["[invalid".to_string()]);
    assert!(matches!(result, Err(SpecGuardError::InvalidPattern { .. })));
}
