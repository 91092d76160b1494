//! Command handlers, one module per subcommand.

pub mod config;
pub mod encrypt;
pub mod misc;
pub mod serve;
