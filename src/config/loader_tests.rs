use std::collections::HashMap;
use std::io::{Error, ErrorKind};

use super::*;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            config_dir: Some(PathBuf::from("/home/user/.config/spec-guard")),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(PathBuf::from("/project"))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn no_config_files_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn local_config_takes_precedence() {
    let fs = MockFileSystem::new()
        .with_file("/project/.spec-guard.toml", "[expectations]\nmax_per_example = 2\n")
        .with_file(
            "/home/user/.config/spec-guard/config.toml",
            "[expectations]\nmax_per_example = 5\n",
        );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.expectations.max_per_example, 2);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/project/.spec-guard.toml"))
    );
}

#[test]
fn falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/spec-guard/config.toml",
        "[models]\ndir = \"domain\"\n",
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.models.dir, "domain");
}

#[test]
fn missing_config_dir_is_tolerated() {
    let fs = MockFileSystem {
        config_dir: None,
        ..MockFileSystem::default()
    };
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(result.source.is_none());
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, SpecGuardError::Config(_)));
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn load_from_path_rejects_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/custom.toml", "[scanner\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom.toml"))
        .unwrap_err();
    assert!(matches!(err, SpecGuardError::TomlParse(_)));
}

#[test]
fn load_from_path_runs_semantic_validation() {
    let fs = MockFileSystem::new().with_file("/custom.toml", "[rules.bogus]\nenabled = false\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom.toml"))
        .unwrap_err();
    assert!(matches!(err, SpecGuardError::UnknownRule(_)));
}
