use serde::Serialize;

use crate::checker::{Report, Severity};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    violations: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: &'a str,
    line: usize,
    rule: &'a str,
    severity: Severity,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: report.files_checked,
                violations: report.violations.len(),
                errors: report.errors(),
                warnings: report.warnings(),
            },
            violations: report
                .violations
                .iter()
                .map(|v| JsonViolation {
                    path: &v.path,
                    line: v.line,
                    rule: &v.rule,
                    severity: v.severity,
                    message: &v.message,
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
