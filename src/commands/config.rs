use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config};
use crate::output::{self, OutputFormat};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SpecGuardError};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config)
            .map(|()| format!("Configuration is valid: {}\n", config.display())),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
        }
    };

    match result {
        Ok(text) => {
            print!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            output::print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SpecGuardError::Config(format!(
            "configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    parse_config(&content)?;
    Ok(())
}

/// Render the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => format_config_text(&loaded.config, loaded.source.as_deref()),
    }
}

/// Effective configuration as TOML, headed by where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(config: &Config, source: Option<&Path>) -> Result<String> {
    let origin = source.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let body = toml::to_string_pretty(config)?;
    Ok(format!("# Effective configuration ({origin})\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
