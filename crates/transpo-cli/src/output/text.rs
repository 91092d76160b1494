//! Text and table output formatting for encryption results.

use transpo_core::EncryptionOutcome;

use crate::ui::{header, kv, table, warning_message, UiContext};

/// Render an outcome as lines for stdout.
///
/// Pretty mode: header plus a cipher/key/encrypted table.
/// Plain mode: one `cipher=ciphertext` line per result, stable for scripts.
pub fn outcome_lines(ctx: &UiContext, outcome: &EncryptionOutcome) -> Vec<String> {
    if ctx.mode.is_pretty() {
        let context = format!("{} cipher(s)", outcome.results.len());
        let rows: Vec<Vec<String>> = outcome
            .results
            .iter()
            .map(|result| {
                vec![
                    result.cipher.display_name().to_string(),
                    result.key.to_string(),
                    result.encrypted.clone(),
                ]
            })
            .collect();
        vec![
            header(ctx, "encrypt", Some(&context)),
            table(ctx, &["Cipher", "Key", "Encrypted"], &rows),
        ]
    } else {
        outcome
            .results
            .iter()
            .map(|result| kv(ctx, result.cipher.display_name(), &result.encrypted))
            .collect()
    }
}

/// Print an outcome to stdout.
pub fn print_outcome(ctx: &UiContext, outcome: &EncryptionOutcome) {
    for line in outcome_lines(ctx, outcome) {
        println!("{}", line);
    }
}

/// Print skipped-cipher warnings to stderr.
pub fn print_warnings(ctx: &UiContext, outcome: &EncryptionOutcome) {
    for warning in &outcome.warnings {
        eprintln!("{}", warning_message(ctx, &warning.to_string()));
    }
}
