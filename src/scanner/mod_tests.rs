use std::fs;

use tempfile::TempDir;

use super::*;

fn tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    for relative in [
        "models/user_spec.rb",
        "legacy/old_spec.rb",
        "generated/schema_spec.rb",
        "models/user_test.rb",
    ] {
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
    fs::write(temp.path().join(".gitignore"), "generated/\n").unwrap();
    temp
}

fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|p| crate::path_utils::relative_slash(p, root).unwrap())
        .collect()
}

#[test]
fn config_and_cli_excludes_combine() {
    let temp = tree();
    let config = ScannerConfig {
        exclude: vec!["legacy/**".to_string()],
        ..ScannerConfig::default()
    };

    let scanner = spec_scanner(&config, &["generated/**".to_string()], true).unwrap();
    let files = scanner.scan(temp.path()).unwrap();

    assert_eq!(relative(&files, temp.path()), vec!["models/user_spec.rb"]);
}

#[test]
fn gitignore_is_honored_by_default() {
    let temp = tree();

    let scanner = spec_scanner(&ScannerConfig::default(), &[], false).unwrap();
    let files = scanner.scan(temp.path()).unwrap();

    assert_eq!(
        relative(&files, temp.path()),
        vec!["legacy/old_spec.rb", "models/user_spec.rb"]
    );
}

#[test]
fn no_gitignore_flag_overrides_config() {
    let temp = tree();

    let scanner = spec_scanner(&ScannerConfig::default(), &[], true).unwrap();
    let files = scanner.scan(temp.path()).unwrap();

    assert_eq!(files.len(), 3);
}

#[test]
fn custom_suffix_and_extension() {
    let temp = tree();
    let config = ScannerConfig {
        extensions: vec!["rb".to_string()],
        spec_suffix: "_test".to_string(),
        gitignore: false,
        ..ScannerConfig::default()
    };

    let files = spec_scanner(&config, &[], false)
        .unwrap()
        .scan(temp.path())
        .unwrap();

    assert_eq!(relative(&files, temp.path()), vec!["models/user_test.rb"]);
}

#[test]
fn invalid_exclude_is_rejected() {
    let err = spec_scanner(&ScannerConfig::default(), &["[".to_string()], false).err();
    assert!(matches!(err, Some(crate::SpecGuardError::InvalidPattern { .. })));
}
