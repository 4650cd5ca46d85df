use std::path::Path;

use crate::checker::{SourceIndex, SpecFile};
use crate::parser::SpecParser;

use super::{Finding, Rule, RuleContext};

pub fn spec_file(relative: &str, content: &str) -> SpecFile {
    SpecFile::new(Path::new("spec").join(relative), relative, content)
}

pub fn run(rule: &dyn Rule, relative: &str, content: &str) -> Vec<Finding> {
    run_with_sources(rule, relative, content, &SourceIndex::default())
}

pub fn run_with_sources(
    rule: &dyn Rule,
    relative: &str,
    content: &str,
    sources: &SourceIndex,
) -> Vec<Finding> {
    let file = spec_file(relative, content);
    let parsed = SpecParser::default().parse(&file.content);
    let ctx = RuleContext {
        file: &file,
        parsed: &parsed,
        sources,
    };
    rule.check(&ctx).unwrap()
}
