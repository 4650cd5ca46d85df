use std::path::Path;

use crate::checker::{Checker, SourceIndex};
use crate::cli::{CheckArgs, Cli};
use crate::output::{self, ColorMode, ScanProgress};
use crate::parser::SpecParser;
use crate::rules::RuleSet;
use crate::scanner::{FileScanner, spec_scanner};
use crate::{EXIT_CONFIG_ERROR, Result, SpecGuardError};

use super::load_config;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            output::print_error_full(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run a full check and return the exit code.
///
/// # Errors
/// Returns an error for invalid roots, configuration problems, unknown
/// `--rule` names, or a report that cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    validate_root(&args.specs_root)?;
    validate_root(&args.source_root)?;

    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let config = loaded.config;

    let rules = RuleSet::build(&config, &args.rules)?;
    tracing::info!(rules = rules.len(), "rule set ready");

    let scanner = spec_scanner(&config.scanner, &args.exclude, args.no_gitignore)?;
    tracing::info!(root = %args.specs_root.display(), "scanning spec files");
    let files = scanner.scan(&args.specs_root)?;
    if files.is_empty() && !cli.quiet {
        output::print_warning(
            &format!("no spec files found under {}", args.specs_root.display()),
            cli.color.into(),
        );
    }

    let sources = SourceIndex::build(&args.source_root);
    let parser = SpecParser::new(config.parser.assertion_keywords.iter().cloned());
    let checker = Checker::new(parser, rules, sources);

    tracing::info!(files = files.len(), "checking spec files");
    let progress = ScanProgress::new(u64::try_from(files.len()).unwrap_or(u64::MAX), cli.quiet);
    let report = checker.check_tree(&args.specs_root, &files, |_| progress.inc());
    progress.finish();

    let color = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let rendered = output::render(&report, args.format, color)?;
    output::write_output(&rendered, args.output.as_deref(), cli.quiet)?;

    Ok(output::exit_code(&report, args.fail_on))
}

fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SpecGuardError::InvalidRoot {
            path: path.to_path_buf(),
            reason: "does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(SpecGuardError::InvalidRoot {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
