use super::*;
use crate::checker::SourceIndex;
use crate::config::DEFAULT_MIRROR_EXEMPT;
use crate::rules::test_fixtures::run_with_sources;

fn rule() -> MirroredDirectoryNaming {
    let exempt: Vec<String> = DEFAULT_MIRROR_EXEMPT
        .iter()
        .map(ToString::to_string)
        .collect();
    MirroredDirectoryNaming::new("_spec", &exempt).unwrap()
}

fn sources() -> SourceIndex {
    SourceIndex::from_paths("app/models", ["article.rb", "admin/user.rb"])
}

#[test]
fn mirrored_spec_passes() {
    let findings = run_with_sources(&rule(), "article_spec.rb", "", &sources());
    assert!(findings.is_empty());
}

#[test]
fn nested_mirrored_spec_passes() {
    let findings = run_with_sources(&rule(), "admin/user_spec.rb", "", &sources());
    assert!(findings.is_empty());
}

#[test]
fn missing_source_is_one_violation() {
    let findings = run_with_sources(&rule(), "widget_spec.rb", "describe Widget do\nend\n", &sources());

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(
        findings[0].message,
        "no source file mirrors this spec: expected `app/models/widget.rb`"
    );
}

#[test]
fn wrong_directory_is_a_violation() {
    let findings = run_with_sources(&rule(), "blog/article_spec.rb", "", &sources());
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("app/models/blog/article.rb"));
}

#[test]
fn missing_suffix_is_a_violation() {
    let findings = run_with_sources(&rule(), "article_test.rb", "", &sources());
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message,
        "spec file `article_test.rb` should be named `article_test_spec.rb`"
    );
}

#[test]
fn bare_suffix_is_not_a_name() {
    let findings = run_with_sources(&rule(), "_spec.rb", "", &sources());
    assert_eq!(findings.len(), 1);
}

#[test]
fn exempt_directories_are_skipped() {
    let findings = run_with_sources(&rule(), "support/helpers_spec.rb", "", &sources());
    assert!(findings.is_empty());
    let findings = run_with_sources(&rule(), "features/signup_spec.rb", "", &sources());
    assert!(findings.is_empty());
}

#[test]
fn invalid_exempt_glob_is_rejected() {
    let result = MirroredDirectoryNaming::new("_spec", &["a/[".to_string()]);
    assert!(matches!(result, Err(SpecGuardError::InvalidPattern { .. })));
}
