mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SpecFileFilter};

use std::path::{Path, PathBuf};

use crate::config::ScannerConfig;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Build the spec scanner described by `[scanner]`, plus any extra excludes
/// and an optional gitignore override from the command line.
///
/// # Errors
/// Returns an error if any exclude pattern is invalid.
pub fn spec_scanner(
    config: &ScannerConfig,
    extra_excludes: &[String],
    no_gitignore: bool,
) -> Result<DirectoryScanner<SpecFileFilter>> {
    let mut exclude = config.exclude.clone();
    exclude.extend_from_slice(extra_excludes);
    let filter = SpecFileFilter::new(config.extensions.clone(), &config.spec_suffix, &exclude)?;
    Ok(DirectoryScanner::with_gitignore(
        filter,
        config.gitignore && !no_gitignore,
    ))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
