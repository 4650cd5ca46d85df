use regex::Regex;

use crate::parser::BlockKind;
use crate::path_utils::to_slash;

use super::{Finding, Rule, RuleContext, RuleError};

pub const NAME: &str = "model-no-self-mock";

/// Model specs must exercise the real model, not a stub or double of it.
#[derive(Debug, Clone)]
pub struct ModelNoSelfMock {
    models_dir: String,
    spec_suffix: String,
}

impl ModelNoSelfMock {
    #[must_use]
    pub fn new(models_dir: &str, spec_suffix: &str) -> Self {
        Self {
            models_dir: models_dir.trim_matches('/').to_string(),
            spec_suffix: spec_suffix.to_string(),
        }
    }

    /// True when the models directory appears among the file's directories
    /// below the specs root, or is the tail of the specs root itself
    /// (`check spec/models app/models`).
    fn is_model_spec(&self, ctx: &RuleContext<'_>) -> bool {
        let relative = format!("/{}", ctx.file.relative_path);
        let needle = format!("/{}/", self.models_dir);
        let below_root = relative
            .rsplit_once('/')
            .is_some_and(|(dirs, _)| format!("{dirs}/").contains(&needle));

        let full = format!("/{}", to_slash(&ctx.file.path));
        let root_is_models = full
            .strip_suffix(relative.as_str())
            .is_some_and(|root| format!("{root}/").ends_with(&needle));

        below_root || root_is_models
    }

    /// The constant under test: the root `describe` constant (last path
    /// segment), else the camelized file stem.
    fn model_name(&self, ctx: &RuleContext<'_>) -> Option<String> {
        let from_describe = ctx
            .parsed
            .roots
            .iter()
            .find(|r| r.kind == BlockKind::Describe && r.label.is_constant())
            .and_then(|r| r.label.text.rsplit("::").next())
            .map(ToString::to_string);
        if from_describe.is_some() {
            return from_describe;
        }

        let file_name = ctx.file.relative_path.rsplit('/').next()?;
        let stem = file_name.split('.').next()?;
        let base = stem.strip_suffix(self.spec_suffix.as_str()).unwrap_or(stem);
        (!base.is_empty()).then(|| camelize(base))
    }
}

impl Rule for ModelNoSelfMock {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Model specs do not mock or stub the model under test."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>, RuleError> {
        if !self.is_model_spec(ctx) {
            return Ok(Vec::new());
        }
        let Some(model) = self.model_name(ctx) else {
            return Ok(Vec::new());
        };
        // Compiled per file: the pattern embeds the model name.
        let matcher = self_mock_pattern(&model)?;

        Ok(ctx
            .file
            .content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with('#'))
            .filter(|(_, line)| matcher.is_match(line))
            .map(|(idx, _)| {
                Finding::new(
                    idx + 1,
                    format!("{model} is the model under test; exercise it instead of mocking or stubbing it"),
                )
            })
            .collect())
    }
}

/// One regex covering the stub/mock forms for `model` (`M`) and its
/// instance name (`m`, optionally `@m`).
fn self_mock_pattern(model: &str) -> Result<Regex, RuleError> {
    let class = regex::escape(model);
    let instance = regex::escape(&underscore(model));
    let receiver = format!(r"(?:{class}|@?{instance})");

    let forms = [
        format!(r"\ballow\(\s*{receiver}\s*\)"),
        format!(r"\bexpect\(\s*{receiver}\s*\)\s*\.\s*(?:to|not_to|to_not)\s*\(?\s*(?:receive|have_received)\b"),
        format!(r"\b(?:allow|expect)_any_instance_of\(\s*{class}\s*\)"),
        format!(r"\b{class}\.(?:stub|stubs|should_receive|should_not_receive|any_instance|expects)\b"),
        format!(r"(?:^|[^\w@.]){instance}\.(?:stub|stubs|should_receive|should_not_receive|expects)\b"),
        format!(r"@{instance}\.(?:stub|stubs|should_receive|should_not_receive|expects)\b"),
        format!(
            r#"\b(?:double|instance_double|class_double|mock_model|stub_model)\(\s*(?:{class}\b|["']{class}["'])"#
        ),
    ];

    Ok(Regex::new(&forms.join("|"))?)
}

/// `line_item` -> `LineItem`
fn camelize(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// `LineItem` -> `line_item`, `HTMLPage` -> `html_page`
fn underscore(camel: &str) -> String {
    let chars: Vec<char> = camel.chars().collect();
    let mut out = String::with_capacity(camel.len() + 4);
    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
            if !prev.is_uppercase() || next_lower {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
#[path = "model_self_mock_tests.rs"]
mod tests;
