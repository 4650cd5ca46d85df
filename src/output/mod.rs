mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::TextFormatter;

use std::io::IsTerminal;
use std::path::Path;

use crate::checker::{Report, Severity};
use crate::error::Result;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Trait for rendering a report into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against stdout.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Render `report` in `format`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(report: &Report, format: OutputFormat, color: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

/// Exit code for a finished run: violations at or above `fail_on` fail it.
#[must_use]
pub fn exit_code(report: &Report, fail_on: Severity) -> i32 {
    if report.has_violations_at(fail_on) {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    }
}

/// Write rendered output to `path`, or stdout when `None`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output: &str, path: Option<&Path>, quiet: bool) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, output)?;
        tracing::info!(path = %path.display(), "report written");
    } else if !quiet {
        print!("{output}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
