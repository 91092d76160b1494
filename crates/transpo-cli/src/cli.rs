use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use transpo_core::VERSION;

/// Transpo - Rail Fence and Row Transposition ciphers on the command line and the web
#[derive(Parser)]
#[command(name = "transpo")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "TRANSPO_CONFIG")]
    pub config: Option<String>,

    /// Log filter (e.g. "info", "transpo=debug")
    #[arg(long, global = true, env = "TRANSPO_LOG")]
    pub log_level: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Message to encrypt (spaces are dropped, letters uppercased)
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Rail Fence key: number of rails (at least 2)
    #[arg(short, long, value_name = "N")]
    pub rails: Option<String>,

    /// Row Transposition key: a keyword of letters only
    #[arg(short, long, value_name = "KEYWORD")]
    pub key: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format; defaults to a table on a terminal, plain lines otherwise
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Explicit `--format` choice for encryption results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header plus a cipher/key/ciphertext table
    Table,
    /// One `cipher=ciphertext` line per result
    Plain,
    /// Same as `--json`
    Json,
}

/// Arguments for the `serve` command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for `config init`
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a default config file
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a message with one or both ciphers
    Encrypt(EncryptArgs),

    /// Serve the encryption web form
    Serve(ServeArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigSubcommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
