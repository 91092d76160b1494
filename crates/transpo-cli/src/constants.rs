//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Config file missing, unreadable or malformed.
    pub const CONFIG: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Web server defaults.
pub mod server {
    /// Address the form binds to when nothing else is configured.
    pub const DEFAULT_BIND: &str = "127.0.0.1";

    /// Port the form listens on when nothing else is configured.
    pub const DEFAULT_PORT: u16 = 5000;
}

/// Default tracing filter when neither flag, env nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
