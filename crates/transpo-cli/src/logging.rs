//! Tracing setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Pick the filter directive: explicit flag/env first, then config.
pub fn resolve_directive<'a>(flag: Option<&'a str>, config_level: &'a str) -> &'a str {
    flag.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(config_level)
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(directive: &str) {
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        assert_eq!(resolve_directive(Some("debug"), "warn"), "debug");
    }

    #[test]
    fn test_blank_flag_falls_back_to_config() {
        assert_eq!(resolve_directive(Some("  "), "warn"), "warn");
        assert_eq!(resolve_directive(None, "warn"), "warn");
    }
}
