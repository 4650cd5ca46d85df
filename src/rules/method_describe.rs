use regex::Regex;

use crate::error::{Result, SpecGuardError};
use crate::parser::{BlockKind, LabelStyle};

use super::{Finding, Rule, RuleContext, RuleError};

pub const NAME: &str = "method-describe-naming";

/// A `describe` nested directly in a class-level `describe Model` that names
/// a method must say which kind: `#method` (instance) or `.method` (class).
#[derive(Debug, Clone)]
pub struct MethodDescribeNaming {
    pattern: Regex,
}

impl MethodDescribeNaming {
    /// # Errors
    /// Returns an error if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| SpecGuardError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }
}

impl Rule for MethodDescribeNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Method describes inside a class describe are written `#method` or `.method`."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> std::result::Result<Vec<Finding>, RuleError> {
        let mut findings = Vec::new();

        let class_roots = ctx
            .parsed
            .roots
            .iter()
            .filter(|r| r.kind == BlockKind::Describe && r.label.is_constant());

        for root in class_roots {
            for child in root.children.iter().filter(|c| c.kind == BlockKind::Describe) {
                let label = &child.label;
                if matches!(label.style, LabelStyle::Constant | LabelStyle::None) {
                    continue;
                }
                let text = label.text.as_str();
                if text.starts_with('#') || text.starts_with('.') || !self.pattern.is_match(text) {
                    continue;
                }
                findings.push(Finding::new(
                    child.line,
                    format!(
                        "`describe {label}` names a method; use \"#{text}\" for an instance method or \".{text}\" for a class method"
                    ),
                ));
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
#[path = "method_describe_tests.rs"]
mod tests;
