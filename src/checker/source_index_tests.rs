use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn indexes_nested_files_with_slash_paths() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("models/admin")).unwrap();
    fs::write(temp.path().join("models/article.rb"), "").unwrap();
    fs::write(temp.path().join("models/admin/user.rb"), "").unwrap();

    let index = SourceIndex::build(temp.path());

    assert_eq!(index.len(), 2);
    assert!(index.contains("models/article.rb"));
    assert!(index.contains("models/admin/user.rb"));
    assert!(!index.contains("models/admin"));
    assert_eq!(index.root(), temp.path());
}

#[test]
fn missing_root_yields_empty_index() {
    let temp = TempDir::new().unwrap();
    let index = SourceIndex::build(&temp.path().join("absent"));
    assert!(index.is_empty());
}

#[test]
fn from_paths_for_fixtures() {
    let index = SourceIndex::from_paths("app", ["models/article.rb"]);
    assert!(index.contains("models/article.rb"));
    assert!(!index.contains("models/widget.rb"));
}
