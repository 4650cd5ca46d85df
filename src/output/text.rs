use std::fmt::Write;

use crate::checker::{Report, Severity, Violation};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

/// `path:line: [rule] message` lines followed by a summary line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn rule_tag(&self, violation: &Violation) -> String {
        if !self.use_colors {
            return format!("[{}]", violation.rule);
        }
        let color = match violation.severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        };
        format!("{color}[{}]{}", violation.rule, ansi::RESET)
    }
}

/// `Summary: N files checked, M violations (E errors, W warnings)`
#[must_use]
pub fn summary_line(report: &Report) -> String {
    format!(
        "Summary: {} {} checked, {} {} ({} {}, {} {})",
        report.files_checked,
        plural(report.files_checked, "file", "files"),
        report.violations.len(),
        plural(report.violations.len(), "violation", "violations"),
        report.errors(),
        plural(report.errors(), "error", "errors"),
        report.warnings(),
        plural(report.warnings(), "warning", "warnings"),
    )
}

const fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        for violation in &report.violations {
            let _ = writeln!(
                out,
                "{}:{}: {} {}",
                violation.path,
                violation.line,
                self.rule_tag(violation),
                violation.message
            );
        }
        if !report.violations.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", summary_line(report));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
