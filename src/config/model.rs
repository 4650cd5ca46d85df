use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::Severity;

/// Default method-name pattern for `describe` labels that should carry `#`/`.`.
pub const DEFAULT_METHOD_PATTERN: &str = r"^[a-z_][a-zA-Z0-9_]*[?!=]?$";

/// Spec directories that have no mirrored source file by convention.
pub const DEFAULT_MIRROR_EXEMPT: &[&str] = &[
    "support/**",
    "factories/**",
    "features/**",
    "requests/**",
    "integration/**",
    "system/**",
];

/// Root configuration, one field per TOML section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub expectations: ExpectationsConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub mirror: MirrorConfig,

    #[serde(default)]
    pub models: ModelsConfig,

    /// Per-rule switches `[rules.<name>]`, keyed by rule name.
    #[serde(default)]
    pub rules: IndexMap<String, RuleConfig>,
}

impl Config {
    /// Whether the named rule is enabled (rules are on unless switched off).
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        self.rules.get(name).is_none_or(|r| r.enabled)
    }

    /// Severity override for the named rule, if configured.
    #[must_use]
    pub fn rule_severity(&self, name: &str) -> Option<Severity> {
        self.rules.get(name).and_then(|r| r.severity)
    }
}

/// Spec file discovery `[scanner]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extensions of spec files, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Suffix a file stem must carry to be a spec file.
    #[serde(default = "default_spec_suffix")]
    pub spec_suffix: String,

    /// Glob patterns (relative to the specs root) to skip entirely.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            spec_suffix: default_spec_suffix(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

/// `[parser]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Identifiers that make a statement count as one expectation.
    #[serde(default = "default_assertion_keywords")]
    pub assertion_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            assertion_keywords: default_assertion_keywords(),
        }
    }
}

/// `[expectations]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExpectationsConfig {
    #[serde(default = "default_max_per_example")]
    pub max_per_example: usize,
}

impl Default for ExpectationsConfig {
    fn default() -> Self {
        Self {
            max_per_example: default_max_per_example(),
        }
    }
}

/// `[naming]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    /// Regex a nested `describe` label matches when it names a bare method.
    #[serde(default = "default_method_pattern")]
    pub method_pattern: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            method_pattern: default_method_pattern(),
        }
    }
}

/// `[mirror]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MirrorConfig {
    /// Spec paths (relative to the specs root) exempt from mirroring.
    #[serde(default = "default_mirror_exempt")]
    pub exempt: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            exempt: default_mirror_exempt(),
        }
    }
}

/// `[models]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    /// Directory name marking model specs, matched anywhere in the spec path.
    #[serde(default = "default_models_dir")]
    pub dir: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_models_dir(),
        }
    }
}

/// `[rules.<name>]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["rb".to_string()]
}

fn default_spec_suffix() -> String {
    "_spec".to_string()
}

fn default_assertion_keywords() -> Vec<String> {
    crate::parser::DEFAULT_ASSERTION_KEYWORDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_max_per_example() -> usize {
    1
}

fn default_method_pattern() -> String {
    DEFAULT_METHOD_PATTERN.to_string()
}

fn default_mirror_exempt() -> Vec<String> {
    DEFAULT_MIRROR_EXEMPT.iter().map(ToString::to_string).collect()
}

fn default_models_dir() -> String {
    "models".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
