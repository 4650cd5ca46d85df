use std::fmt::Write;

use crate::cli::{Cli, RulesArgs};
use crate::output::{self, OutputFormat};
use crate::rules::{RULE_NAMES, RuleInfo, RuleSet};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(listing) => {
            print!("{listing}");
            EXIT_SUCCESS
        }
        Err(e) => {
            output::print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the rule catalog with the severities the current config assigns.
///
/// Disabled rules are listed too; `enabled` only matters for `check`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the listing
/// cannot be serialized.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<String> {
    let config = load_config(None, cli.no_config)?.config;
    let everything: Vec<String> = RULE_NAMES.iter().map(ToString::to_string).collect();
    let catalog = RuleSet::build(&config, &everything)?.catalog();

    match args.format {
        OutputFormat::Text => Ok(format_rules_text(&catalog)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog)?;
            Ok(format!("{json}\n"))
        }
    }
}

#[must_use]
pub fn format_rules_text(rules: &[RuleInfo]) -> String {
    let width = rules.iter().map(|r| r.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for rule in rules {
        let _ = writeln!(
            out,
            "{:<width$}  {:<7}  {}",
            rule.name,
            rule.severity.as_str(),
            rule.description
        );
    }
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
