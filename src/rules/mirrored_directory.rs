use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SpecGuardError};
use crate::path_utils::to_slash;

use super::{Finding, Rule, RuleContext, RuleError};

pub const NAME: &str = "mirrored-directory-naming";

/// `<specs>/<dir>/<name><suffix>.<ext>` must mirror `<source>/<dir>/<name>.<ext>`.
pub struct MirroredDirectoryNaming {
    suffix: String,
    exempt: GlobSet,
}

impl MirroredDirectoryNaming {
    /// # Errors
    /// Returns an error if any exempt pattern is not a valid glob.
    pub fn new(suffix: &str, exempt: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exempt {
            let glob = Glob::new(pattern).map_err(|e| SpecGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exempt = builder
            .build()
            .map_err(|e| SpecGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: suffix.to_string(),
            exempt,
        })
    }
}

impl Rule for MirroredDirectoryNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Spec paths mirror the source tree: `spec/x/foo_spec.rb` tests `app/x/foo.rb`."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> std::result::Result<Vec<Finding>, RuleError> {
        let relative = ctx.file.relative_path.as_str();
        if self.exempt.is_match(relative) {
            return Ok(Vec::new());
        }

        let (dir, file_name) = relative.rsplit_once('/').unwrap_or(("", relative));
        let (stem, extension) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{ext}")),
            _ => (file_name, String::new()),
        };

        let Some(base) = stem
            .strip_suffix(self.suffix.as_str())
            .filter(|base| !base.is_empty())
        else {
            return Ok(vec![Finding::new(
                1,
                format!(
                    "spec file `{file_name}` should be named `{stem}{}{extension}`",
                    self.suffix
                ),
            )]);
        };

        let mirrored = if dir.is_empty() {
            format!("{base}{extension}")
        } else {
            format!("{dir}/{base}{extension}")
        };
        if ctx.sources.contains(&mirrored) {
            return Ok(Vec::new());
        }

        Ok(vec![Finding::new(
            1,
            format!(
                "no source file mirrors this spec: expected `{}`",
                to_slash(&ctx.sources.root().join(&mirrored))
            ),
        )])
    }
}

#[cfg(test)]
#[path = "mirrored_directory_tests.rs"]
mod tests;
