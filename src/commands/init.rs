use std::fs;

use crate::cli::InitArgs;
use crate::output::{self, ColorMode};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SpecGuardError};

#[must_use]
pub fn run_init(args: &InitArgs, color: ColorMode) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            println!("Created configuration file: {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            output::print_error_full(&e, color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write the commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(SpecGuardError::Config(format!(
            "configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, generate_config_template())?;
    tracing::info!(path = %args.output.display(), "wrote config template");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# spec-guard configuration file
# Every value below is the built-in default.

[scanner]
# Extensions of spec files, without the dot
extensions = ["rb"]

# A file is a spec file only if its stem ends with this suffix
spec_suffix = "_spec"

# Glob patterns relative to the specs root to skip entirely
exclude = []

# Respect .gitignore files while scanning
gitignore = true

[parser]
# Identifiers that make a statement count as one expectation
assertion_keywords = ["should", "should_not", "expect", "is_expected"]

[expectations]
# Expectations allowed in a single `it`/`its` example
max_per_example = 1

[naming]
# A nested `describe` label matching this names a bare method
method_pattern = '^[a-z_][a-zA-Z0-9_]*[?!=]?$'

[mirror]
# Spec paths (relative to the specs root) with no mirrored source file
exempt = [
    "support/**",
    "factories/**",
    "features/**",
    "requests/**",
    "integration/**",
    "system/**",
]

[models]
# Directory name marking model specs, anywhere in the spec path
dir = "models"

# Per-rule switches. Every rule is enabled with severity "error" unless
# configured otherwise.
# [rules.one-expectation-per-example]
# enabled = true
# severity = "warning"

# [rules.method-describe-naming]
# [rules.mirrored-directory-naming]
# [rules.model-no-self-mock]
# [rules.validation-describe-per-attribute]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
