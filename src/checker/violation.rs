use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rule name for recovered parse problems.
pub const PARSE_WARNING: &str = "parse-warning";

/// Rule name for a rule that failed on a file.
pub const INTERNAL_RULE_ERROR: &str = "internal-rule-error";

/// Violation severity. `Warning < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    #[default]
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown severity: {s} (expected 'error' or 'warning')")),
        }
    }
}

/// One reported convention breach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Spec file path as scanned, `/`-separated.
    pub path: String,
    /// 1-based line.
    pub line: usize,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
}

/// Aggregated outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Ordered by file path, then line, then rule declaration order.
    pub violations: Vec<Violation>,
    pub files_checked: usize,
}

impl Report {
    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when any violation is at or above `threshold`.
    #[must_use]
    pub fn has_violations_at(&self, threshold: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= threshold)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
