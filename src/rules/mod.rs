//! Convention rules evaluated against each parsed spec file.
//!
//! Rules are pure: they read the [`RuleContext`] and return findings, holding
//! only configuration compiled when the [`RuleSet`] is built.

mod method_describe;
mod mirrored_directory;
mod model_self_mock;
mod one_expectation;
mod validation_describe;

#[cfg(test)]
mod test_fixtures;

pub use method_describe::MethodDescribeNaming;
pub use mirrored_directory::MirroredDirectoryNaming;
pub use model_self_mock::ModelNoSelfMock;
pub use one_expectation::OneExpectationPerExample;
pub use validation_describe::ValidationDescribePerAttribute;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::checker::{INTERNAL_RULE_ERROR, PARSE_WARNING, Severity, SourceIndex, SpecFile};
use crate::config::Config;
use crate::error::{Result, SpecGuardError};
use crate::parser::ParsedSpec;

/// Guide rule names in declaration order.
pub const RULE_NAMES: &[&str] = &[
    one_expectation::NAME,
    method_describe::NAME,
    mirrored_directory::NAME,
    model_self_mock::NAME,
    validation_describe::NAME,
];

/// Everything a rule may look at for one file.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub file: &'a SpecFile,
    pub parsed: &'a ParsedSpec,
    pub sources: &'a SourceIndex,
}

/// A rule-local result; the engine attaches path, rule name and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A rule could not evaluate a file.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to build pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    Unexpected(String),
}

pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Evaluate the rule on one file.
    ///
    /// # Errors
    /// Returns an error when the rule cannot evaluate this input; the engine
    /// reports it as an `internal-rule-error` and keeps going.
    fn check(&self, ctx: &RuleContext<'_>) -> std::result::Result<Vec<Finding>, RuleError>;
}

/// Listing entry for `spec-guard rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

struct Entry {
    rule: Box<dyn Rule>,
    severity: Severity,
}

/// The rules of one run, keyed by name in declaration order.
pub struct RuleSet {
    entries: IndexMap<&'static str, Entry>,
}

impl RuleSet {
    /// Build every guide rule from `config`, keeping those enabled there.
    ///
    /// # Errors
    /// Returns an error if a configured regex or glob fails to compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(config, &[])
    }

    /// Build the rules of a run.
    ///
    /// A non-empty `selection` (from `--rule`) replaces the enabled switches:
    /// exactly the named rules run.
    ///
    /// # Errors
    /// Returns an error for an unknown rule name in `selection`, or if a
    /// configured regex or glob fails to compile.
    pub fn build(config: &Config, selection: &[String]) -> Result<Self> {
        if let Some(unknown) = selection
            .iter()
            .find(|name| !RULE_NAMES.contains(&name.as_str()))
        {
            return Err(SpecGuardError::UnknownRule(unknown.clone()));
        }

        let entries = builtin_rules(config)?
            .into_iter()
            .filter(|rule| {
                if selection.is_empty() {
                    config.is_rule_enabled(rule.name())
                } else {
                    selection.iter().any(|s| s == rule.name())
                }
            })
            .map(|rule| {
                let severity = config
                    .rule_severity(rule.name())
                    .unwrap_or_else(|| rule.default_severity());
                (rule.name(), Entry { rule, severity })
            })
            .collect();

        Ok(Self { entries })
    }

    /// Rules with their effective severity, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&dyn Rule, Severity)> {
        self.entries
            .values()
            .map(|entry| (entry.rule.as_ref(), entry.severity))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Describe the guide rules plus the pseudo-rules the engine emits.
    #[must_use]
    pub fn catalog(&self) -> Vec<RuleInfo> {
        let mut infos = vec![RuleInfo {
            name: PARSE_WARNING,
            severity: Severity::Warning,
            description: "The parser recovered from unbalanced blocks; structure may be incomplete.",
        }];
        infos.extend(self.iter().map(|(rule, severity)| RuleInfo {
            name: rule.name(),
            severity,
            description: rule.description(),
        }));
        infos.push(RuleInfo {
            name: INTERNAL_RULE_ERROR,
            severity: Severity::Error,
            description: "A rule failed on a file; the failure is reported instead of aborting.",
        });
        infos
    }
}

fn builtin_rules(config: &Config) -> Result<Vec<Box<dyn Rule>>> {
    Ok(vec![
        Box::new(OneExpectationPerExample::new(
            config.expectations.max_per_example,
        )),
        Box::new(MethodDescribeNaming::new(&config.naming.method_pattern)?),
        Box::new(MirroredDirectoryNaming::new(
            &config.scanner.spec_suffix,
            &config.mirror.exempt,
        )?),
        Box::new(ModelNoSelfMock::new(
            &config.models.dir,
            &config.scanner.spec_suffix,
        )),
        Box::new(ValidationDescribePerAttribute),
    ])
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
