pub mod check;
pub mod config;
pub mod init;
pub mod rules;

pub use check::{run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules_text, run_rules, run_rules_impl};

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::Result;

/// Load the effective configuration for a command.
///
/// `--no-config` wins over everything; an explicit path is loaded as is;
/// otherwise the usual discovery order applies.
///
/// # Errors
/// Returns an error if a config file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}
