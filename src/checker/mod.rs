mod source_index;
mod violation;

pub use source_index::SourceIndex;
pub use violation::{INTERNAL_RULE_ERROR, PARSE_WARNING, Report, Severity, Violation};

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::parser::{ParsedSpec, SpecParser};
use crate::path_utils::{relative_slash, to_slash};
use crate::rules::{Finding, Rule, RuleContext, RuleSet};

/// One spec file loaded for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFile {
    pub path: PathBuf,
    /// Path relative to the specs root, `/`-separated.
    pub relative_path: String,
    pub content: String,
}

impl SpecFile {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        relative_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Read `path` (under `specs_root`). Invalid UTF-8 is replaced, not rejected.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path, specs_root: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::new(
            path,
            relative_path_of(path, specs_root),
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    }
}

fn relative_path_of(path: &Path, specs_root: &Path) -> String {
    relative_slash(path, specs_root).unwrap_or_else(|| to_slash(path))
}

/// Runs the parser and the rule set over spec files.
pub struct Checker {
    parser: SpecParser,
    rules: RuleSet,
    sources: SourceIndex,
}

impl Checker {
    #[must_use]
    pub const fn new(parser: SpecParser, rules: RuleSet, sources: SourceIndex) -> Self {
        Self {
            parser,
            rules,
            sources,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check one file. Violations are ordered by line, then by rule
    /// declaration order with `parse-warning` first.
    #[must_use]
    pub fn check_file(&self, file: &SpecFile) -> Vec<Violation> {
        let parsed = self.parser.parse(&file.content);
        let display_path = to_slash(&file.path);
        let last_line = parsed.line_count.max(1);

        let mut ranked: Vec<(usize, Violation)> = parsed
            .diagnostics
            .iter()
            .map(|d| {
                (
                    0,
                    Violation {
                        path: display_path.clone(),
                        line: d.line.clamp(1, last_line),
                        rule: PARSE_WARNING.to_string(),
                        severity: Severity::Warning,
                        message: d.message.clone(),
                    },
                )
            })
            .collect();

        let ctx = RuleContext {
            file,
            parsed: &parsed,
            sources: &self.sources,
        };
        for (idx, (rule, severity)) in self.rules.iter().enumerate() {
            let rank = idx + 1;
            let outcome = evaluate(rule, severity, &ctx, &parsed, &display_path);
            ranked.extend(outcome.into_iter().map(|v| (rank, v)));
        }

        ranked.sort_by_key(|(rank, v)| (v.line, *rank));
        ranked.into_iter().map(|(_, v)| v).collect()
    }

    /// Check every file in `paths` in parallel and merge the results in
    /// relative path order. `on_file` is called once per finished file.
    pub fn check_tree<F>(&self, specs_root: &Path, paths: &[PathBuf], on_file: F) -> Report
    where
        F: Fn(&Path) + Sync,
    {
        let mut fragments: Vec<(String, Vec<Violation>)> = paths
            .par_iter()
            .map(|path| {
                let fragment = self.check_path(path, specs_root);
                on_file(path);
                fragment
            })
            .collect();

        tracing::info!(files = fragments.len(), "aggregating results");
        fragments.sort_by(|a, b| a.0.cmp(&b.0));

        Report {
            files_checked: fragments.len(),
            violations: fragments.into_iter().flat_map(|(_, v)| v).collect(),
        }
    }

    fn check_path(&self, path: &Path, specs_root: &Path) -> (String, Vec<Violation>) {
        match SpecFile::load(path, specs_root) {
            Ok(file) => {
                let violations = self.check_file(&file);
                tracing::debug!(
                    path = %file.relative_path,
                    violations = violations.len(),
                    "checked file"
                );
                (file.relative_path, violations)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read spec file");
                let unreadable = Violation {
                    path: to_slash(path),
                    line: 1,
                    rule: PARSE_WARNING.to_string(),
                    severity: Severity::Warning,
                    message: format!("cannot read file: {e}"),
                };
                (relative_path_of(path, specs_root), vec![unreadable])
            }
        }
    }
}

/// Run one rule, turning failures and out-of-range lines into
/// `internal-rule-error` violations.
fn evaluate(
    rule: &dyn Rule,
    severity: Severity,
    ctx: &RuleContext<'_>,
    parsed: &ParsedSpec,
    display_path: &str,
) -> Vec<Violation> {
    let last_line = parsed.line_count.max(1);
    let internal = |message: String| Violation {
        path: display_path.to_string(),
        line: 1,
        rule: INTERNAL_RULE_ERROR.to_string(),
        severity: Severity::Error,
        message,
    };

    let findings = match rule.check(ctx) {
        Ok(findings) => findings,
        Err(e) => {
            tracing::warn!(rule = rule.name(), path = display_path, error = %e, "rule failed");
            return vec![internal(format!("rule `{}` failed: {e}", rule.name()))];
        }
    };

    findings
        .into_iter()
        .map(|Finding { line, message }| {
            if (1..=last_line).contains(&line) {
                Violation {
                    path: display_path.to_string(),
                    line,
                    rule: rule.name().to_string(),
                    severity,
                    message,
                }
            } else {
                internal(format!(
                    "rule `{}` reported line {line} outside 1..={last_line}",
                    rule.name()
                ))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
