mod common;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn help_lists_subcommands() {
    spec_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn check_requires_both_roots() {
    spec_guard!()
        .args(["check", "spec"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SOURCE_ROOT"));
}

#[test]
fn invalid_format_is_rejected() {
    let fixture = TestFixture::new();

    spec_guard!()
        .current_dir(fixture.path())
        .args(["check", "spec", "app", "--format", "xml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn invalid_fail_on_is_rejected() {
    spec_guard!()
        .args(["check", "spec", "app", "--fail-on", "fatal"])
        .assert()
        .code(2);
}

#[test]
fn rules_lists_catalog() {
    spec_guard!()
        .args(["rules", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse-warning"))
        .stdout(predicate::str::contains("one-expectation-per-example"))
        .stdout(predicate::str::contains("method-describe-naming"))
        .stdout(predicate::str::contains("mirrored-directory-naming"))
        .stdout(predicate::str::contains("model-no-self-mock"))
        .stdout(predicate::str::contains("validation-describe-per-attribute"))
        .stdout(predicate::str::contains("internal-rule-error"));
}

#[test]
fn rules_reflect_configured_severity() {
    let fixture = TestFixture::new();
    fixture.create_config("[rules.model-no-self-mock]\nseverity = \"warning\"\n");

    let output = spec_guard!()
        .current_dir(fixture.path())
        .args(["rules", "--format", "json"])
        .output()
        .unwrap();
    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let entry = catalog
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == "model-no-self-mock")
        .unwrap();
    assert_eq!(entry["severity"], "warning");
}

#[test]
fn init_creates_config() {
    let fixture = TestFixture::new();

    spec_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.path().join(".spec-guard.toml").exists());
}

#[test]
fn init_refuses_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# keep\n");

    spec_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    spec_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let written = std::fs::read_to_string(fixture.path().join(".spec-guard.toml")).unwrap();
    assert!(written.contains("[scanner]"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::new();
    fixture.create_model("article", "Article");

    spec_guard!()
        .current_dir(fixture.path())
        .args(["check", "spec", "app", "--no-config", "-vv", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("checking spec files"));
}
