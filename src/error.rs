use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid root {}: {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SpecGuardError {
    /// Short category label used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::InvalidRoot { .. } | Self::UnknownRule(_) => "Invocation",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint shown under the error, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidRoot { .. } => {
                Some("pass existing directories: check <SPECS_ROOT> <SOURCE_ROOT>".to_string())
            }
            Self::UnknownRule(_) => {
                Some("run `spec-guard rules` to list the available rule names".to_string())
            }
            Self::InvalidPattern { .. } => {
                Some("check the glob pattern syntax (e.g. \"support/**\")".to_string())
            }
            Self::InvalidRegex { .. } => {
                Some("check the regular expression syntax in the configuration".to_string())
            }
            Self::TomlParse(_) => Some("run `spec-guard config validate` for details".to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
