//! Configuration semantic validation.
//!
//! Runs after TOML parsing: range checks, pattern compilation and rule names.

use crate::config::Config;
use crate::rules::RULE_NAMES;
use crate::{Result, SpecGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for empty required values, a zero expectation limit,
/// invalid glob or regex patterns, or `[rules.<name>]` entries naming an
/// unknown rule.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_limits(config)?;
    validate_patterns(config)?;
    validate_rule_names(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(SpecGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    if let Some(ext) = config.scanner.extensions.iter().find(|e| e.starts_with('.')) {
        return Err(SpecGuardError::Config(format!(
            "scanner.extensions entries are written without a dot, got '{ext}'"
        )));
    }
    if config.scanner.spec_suffix.is_empty() {
        return Err(SpecGuardError::Config(
            "scanner.spec_suffix must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_limits(config: &Config) -> Result<()> {
    if config.expectations.max_per_example == 0 {
        return Err(SpecGuardError::Config(
            "expectations.max_per_example must be at least 1".to_string(),
        ));
    }
    if config.parser.assertion_keywords.is_empty() {
        return Err(SpecGuardError::Config(
            "parser.assertion_keywords must not be empty".to_string(),
        ));
    }
    let dir = config.models.dir.trim_matches('/');
    if dir.is_empty() {
        return Err(SpecGuardError::Config(
            "models.dir must name a directory under the specs root".to_string(),
        ));
    }
    Ok(())
}

fn validate_patterns(config: &Config) -> Result<()> {
    for pattern in config.scanner.exclude.iter().chain(&config.mirror.exempt) {
        globset::Glob::new(pattern).map_err(|e| SpecGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    regex::Regex::new(&config.naming.method_pattern).map_err(|e| {
        SpecGuardError::InvalidRegex {
            pattern: config.naming.method_pattern.clone(),
            source: e,
        }
    })?;
    Ok(())
}

fn validate_rule_names(config: &Config) -> Result<()> {
    match config.rules.keys().find(|name| !RULE_NAMES.contains(&name.as_str())) {
        Some(name) => Err(SpecGuardError::UnknownRule(format!("{name} (in [rules.{name}])"))),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
