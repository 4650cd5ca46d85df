use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::path_utils::relative_slash;

/// Every file under the source root, as `/`-separated relative paths.
///
/// Built once before checking so rules can answer "does the mirrored source
/// file exist" without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    root: PathBuf,
    files: HashSet<String>,
}

impl SourceIndex {
    /// Walk `root` and record every regular file. Unreadable entries are skipped.
    #[must_use]
    pub fn build(root: &Path) -> Self {
        let files: HashSet<String> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| relative_slash(e.path(), root))
            .collect();
        tracing::debug!(root = %root.display(), files = files.len(), "indexed source root");

        Self {
            root: root.to_path_buf(),
            files,
        }
    }

    /// Index built from known relative paths.
    #[must_use]
    pub fn from_paths<I, S>(root: impl Into<PathBuf>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            files: paths.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn contains(&self, relative: &str) -> bool {
        self.files.contains(relative)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "source_index_tests.rs"]
mod tests;
