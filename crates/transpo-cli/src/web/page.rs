//! HTML rendering for the encryption form.
//!
//! The page is a single form that posts back to itself. Results and
//! validation alerts are rendered above the form on the same page.

use transpo_core::{CipherResult, EncryptionOutcome, EncryptionRequest, Rejection, ValidationError};

/// Generic message for failures that are not the user's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred during encryption. Please try again.";

/// Everything the page template needs.
#[derive(Debug, Default)]
pub struct PageView {
    pub message: String,
    pub rail_fence_key: String,
    pub row_transposition_key: String,
    pub results: Vec<CipherResult>,
    pub alerts: Vec<String>,
}

impl PageView {
    /// Blank form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form echoing the submitted inputs, with results and any skipped-cipher alerts.
    pub fn with_outcome(request: &EncryptionRequest, outcome: &EncryptionOutcome) -> Self {
        Self {
            message: outcome.message.clone(),
            rail_fence_key: request.rail_fence_key.clone().unwrap_or_default(),
            row_transposition_key: request.row_transposition_key.clone().unwrap_or_default(),
            results: outcome.results.clone(),
            alerts: alert_texts(&outcome.warnings),
        }
    }

    /// Blank form carrying the reasons the request was refused.
    pub fn rejected(rejection: &Rejection) -> Self {
        Self {
            alerts: alert_texts(&rejection.errors),
            ..Self::default()
        }
    }

    /// Blank form with the generic failure alert.
    pub fn internal_error() -> Self {
        Self {
            alerts: vec![INTERNAL_ERROR_MESSAGE.to_string()],
            ..Self::default()
        }
    }
}

fn alert_texts(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_alerts(alerts: &[String]) -> String {
    alerts
        .iter()
        .map(|alert| {
            format!(
                r#"<div class="alert alert-error" role="alert">{}</div>"#,
                escape_html(alert)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_results(results: &[CipherResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let cards = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            format!(
                r#"<div class="result">
    <h3>{name}</h3>
    <p class="result-key">Key: <code>{key}</code></p>
    <pre id="result-{index}" class="ciphertext">{encrypted}</pre>
    <button type="button" data-copy data-target="result-{index}">Copy</button>
</div>"#,
                name = escape_html(result.cipher.display_name()),
                key = escape_html(&result.key.to_string()),
                index = index,
                encrypted = escape_html(&result.encrypted),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(r#"<section class="results"><h2>Results</h2>{}</section>"#, cards)
}

/// Render the full page.
pub fn render(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Transposition Cipher Tool</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #1f2937; }}
label {{ display: block; margin-top: 1rem; font-weight: 600; }}
input, textarea {{ width: 100%; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }}
button {{ margin-top: 1rem; padding: 0.5rem 1rem; cursor: pointer; }}
.alert-error {{ background: #fee2e2; color: #991b1b; padding: 0.75rem; margin-bottom: 0.5rem; border-radius: 4px; }}
.result {{ border: 1px solid #d1d5db; border-radius: 4px; padding: 1rem; margin-bottom: 1rem; }}
.ciphertext {{ background: #f3f4f6; padding: 0.5rem; white-space: pre-wrap; word-break: break-all; }}
.hint {{ color: #6b7280; font-size: 0.875rem; }}
.is-invalid {{ border-color: #dc2626; }}
.invalid-feedback {{ color: #dc2626; font-size: 0.875rem; margin-top: 0.25rem; }}
</style>
</head>
<body>
<h1>Transposition Cipher Tool</h1>
<p class="hint">Rail Fence and Row Transposition encryption. These ciphers are for learning, not for protecting secrets.</p>
{alerts}
{results}
<form id="encrypt-form" method="post" action="/encrypt" novalidate>
    <label for="message">Message</label>
    <textarea id="message" name="message" rows="4" required>{message}</textarea>
    <div class="invalid-feedback" id="message-feedback" hidden></div>

    <label for="rail_fence_key">Rail Fence key (number of rails)</label>
    <input id="rail_fence_key" name="rail_fence_key" type="number" min="2" value="{rail_fence_key}">
    <div class="invalid-feedback" id="rail_fence_key-feedback" hidden></div>

    <label for="row_transposition_key">Row Transposition key (letters only)</label>
    <input id="row_transposition_key" name="row_transposition_key" type="text" value="{row_transposition_key}">
    <div class="invalid-feedback" id="row_transposition_key-feedback" hidden></div>

    <p class="hint">Spaces are removed and letters uppercased before encryption. Supply one or both keys.</p>
    <div class="invalid-feedback" id="keys-feedback" hidden></div>
    <button type="submit">Encrypt</button>
</form>
<script src="/static/script.js"></script>
</body>
</html>
"#,
        alerts = render_alerts(&view.alerts),
        results = render_results(&view.results),
        message = escape_html(&view.message),
        rail_fence_key = escape_html(&view.rail_fence_key),
        row_transposition_key = escape_html(&view.row_transposition_key),
    )
}
