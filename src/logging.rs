//! Tracing setup: human-readable logs on stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the level chosen from flags,
/// using `EnvFilter` directives (e.g. `SPEC_GUARD_LOG=spec_guard=debug`).
pub const LOG_ENV: &str = "SPEC_GUARD_LOG";

/// Console level for the global `-v`/`--quiet` flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
