use transpo_core::{encrypt_request, EncryptionRequest};

use crate::app::AppContext;
use crate::cli::EncryptArgs;
use crate::errors::CliError;
use crate::output::{outcome_json, print_outcome, print_warnings, rejection_json};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format);
    let request = EncryptionRequest {
        message: args.message.clone(),
        rail_fence_key: args.rails.clone(),
        row_transposition_key: args.key.clone(),
    };

    tracing::debug!(
        rail_fence = request.rail_fence_key.is_some(),
        row_transposition = request.row_transposition_key.is_some(),
        "encrypt requested"
    );

    match encrypt_request(&request) {
        Ok(outcome) => {
            if ui_ctx.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
                return Ok(());
            }
            print_warnings(&ui_ctx, &outcome);
            if ctx.quiet() {
                for result in &outcome.results {
                    println!("{}", result.encrypted);
                }
            } else {
                print_outcome(&ui_ctx, &outcome);
            }
            Ok(())
        }
        Err(rejection) => {
            tracing::debug!(errors = rejection.errors.len(), "request rejected");
            if ui_ctx.mode.is_json() {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rejection_json(&rejection))?
                );
            }
            Err(CliError::from(rejection).into())
        }
    }
}
