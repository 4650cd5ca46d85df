use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{Block, BlockKind, LabelStyle, ParsedSpec};

use super::{Finding, Rule, RuleContext, RuleError};

pub const NAME: &str = "validation-describe-per-attribute";

static VALIDATION_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvalidate_[a-z_]+?_of\b\s*\(?\s*:([A-Za-z_]\w*)")
        .expect("validation matcher regex is valid")
});

/// Validation matchers for an attribute belong inside `describe '#attr'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationDescribePerAttribute;

impl Rule for ValidationDescribePerAttribute {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Each validated attribute gets its own nested `describe '#attribute'`."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>, RuleError> {
        let mut reported = HashSet::new();
        let mut findings = Vec::new();

        for (idx, line) in ctx.file.content.lines().enumerate() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            let line_no = idx + 1;
            for caps in VALIDATION_MATCHER.captures_iter(line) {
                let attribute = &caps[1];
                if reported.contains(attribute) {
                    continue;
                }
                let chain = enclosing_blocks(ctx.parsed, line_no);
                let in_model_describe = chain
                    .first()
                    .is_some_and(|root| root.kind == BlockKind::Describe && root.label.is_constant());
                if !in_model_describe || chain.iter().any(|b| describes_attribute(b, attribute)) {
                    continue;
                }
                reported.insert(attribute.to_string());
                findings.push(Finding::new(
                    line_no,
                    format!(
                        "validation of :{attribute} belongs in its own `describe \"#{attribute}\"` block"
                    ),
                ));
            }
        }

        Ok(findings)
    }
}

/// Blocks containing `line`, outermost first.
fn enclosing_blocks(parsed: &ParsedSpec, line: usize) -> Vec<&Block> {
    let contains = |b: &&Block| b.line <= line && line <= b.end_line;
    let mut chain = Vec::new();
    let mut level = parsed.roots.iter().find(contains);
    while let Some(block) = level {
        chain.push(block);
        level = block.children.iter().find(contains);
    }
    chain
}

fn describes_attribute(block: &Block, attribute: &str) -> bool {
    if block.kind != BlockKind::Describe
        || matches!(block.label.style, LabelStyle::Constant | LabelStyle::None)
    {
        return false;
    }
    let text = block.label.text.as_str();
    text == attribute || text.strip_prefix('#') == Some(attribute)
}

#[cfg(test)]
#[path = "validation_describe_tests.rs"]
mod tests;
