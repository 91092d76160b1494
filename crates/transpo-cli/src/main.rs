//! Transpo CLI - Rail Fence and Row Transposition ciphers
//!
//! This is the command-line interface for Transpo. It encrypts messages
//! directly and serves the web form around the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;
mod web;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{config as config_cmd, encrypt, misc, serve};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::errors::CliError;
use crate::ui::print_error;

const REJECTION_HINT: &str = "Pass --rails N (at least 2) and/or --key KEYWORD (letters only).";

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // A broken config must not stop logging; the command reports it later.
    let config_level = ctx
        .config()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    logging::init(logging::resolve_directive(
        ctx.cli().log_level.as_deref(),
        &config_level,
    ));

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let code = match e.downcast_ref::<CliError>() {
            Some(cli_error) => {
                match cli_error {
                    CliError::Rejected(rejection) => {
                        for error in &rejection.errors {
                            print_error(&ui_ctx, &error.to_string(), None);
                        }
                        eprintln!("{}", ui::render::hint(&ui_ctx, REJECTION_HINT));
                    }
                    CliError::Config { .. } => report(&ui_ctx, &cli_error.to_string()),
                }
                cli_error.exit_code()
            }
            None => {
                report(&ui_ctx, &format!("{:#}", e));
                1
            }
        };

        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Encrypt(args) => encrypt::handle_encrypt(ctx, args),
        Commands::Serve(args) => serve::handle_serve(ctx, args),
        Commands::Config(ConfigSubcommand::Init(args)) => config_cmd::handle_config_init(ctx, args),
        Commands::Config(ConfigSubcommand::Show) => config_cmd::handle_config_show(ctx),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}

/// Print an error, splitting off a trailing "Hint:" line if present.
fn report(ui_ctx: &ui::UiContext, error: &str) {
    let (message, hint) = split_hint(error);
    print_error(ui_ctx, message, hint);
}

fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (
            &error[..idx],
            Some(strip_hint_label(&error[idx + 1..])),
        ),
        None => (error, None),
    }
}

fn strip_hint_label(hint: &str) -> &str {
    hint.strip_prefix("Hint:").map(str::trim_start).unwrap_or(hint)
}
