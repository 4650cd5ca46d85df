use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SpecGuardError};

pub trait FileFilter {
    /// `path` is relative to the scanned root.
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects spec files: a configured extension, a stem ending in the spec
/// suffix, and no match among the exclude globs.
pub struct SpecFileFilter {
    extensions: Vec<String>,
    spec_suffix: String,
    exclude_patterns: GlobSet,
}

impl SpecFileFilter {
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, spec_suffix: &str, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SpecGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SpecGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            spec_suffix: spec_suffix.to_string(),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn has_spec_suffix(&self, path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.strip_suffix(self.spec_suffix.as_str()))
            .is_some_and(|base| !base.is_empty())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SpecFileFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && self.has_spec_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
