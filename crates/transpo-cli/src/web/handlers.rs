//! Request handlers for the encryption form and JSON API.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use tokio::task::JoinError;
use transpo_core::{encrypt_request, EncryptionOutcome, EncryptionRequest, Rejection};

use super::page::{self, PageView, INTERNAL_ERROR_MESSAGE};
use crate::output::{outcome_json, rejection_json};

const SCRIPT_JS: &str = include_str!("static/script.js");

/// Result of processing a request on the blocking pool.
type Processed = Result<Result<EncryptionOutcome, Rejection>, JoinError>;

/// Run the work off the async executor.
///
/// The ciphers are cheap, but a panic inside one must not take down the
/// connection task; it surfaces here as a `JoinError`.
async fn run_blocking<F>(work: F) -> Processed
where
    F: FnOnce() -> Result<EncryptionOutcome, Rejection> + Send + 'static,
{
    tokio::task::spawn_blocking(work).await
}

/// Blank form.
pub async fn index() -> impl IntoResponse {
    Html(page::render(&PageView::empty()))
}

/// Form submission: render results, or the form again with alerts.
pub async fn encrypt_form(Form(request): Form<EncryptionRequest>) -> Response {
    let owned = request.clone();
    let processed = run_blocking(move || encrypt_request(&owned)).await;
    form_response(&request, processed)
}

fn form_response(request: &EncryptionRequest, processed: Processed) -> Response {
    match processed {
        Ok(Ok(outcome)) => {
            tracing::info!(
                results = outcome.results.len(),
                warnings = outcome.warnings.len(),
                "Encrypted message from form"
            );
            Html(page::render(&PageView::with_outcome(request, &outcome))).into_response()
        }
        Ok(Err(rejection)) => {
            tracing::debug!(errors = rejection.errors.len(), "Form request rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(page::render(&PageView::rejected(&rejection))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Encryption error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page::render(&PageView::internal_error())),
            )
                .into_response()
        }
    }
}

/// JSON API: same processing, JSON in and out.
pub async fn encrypt_api(Json(request): Json<EncryptionRequest>) -> Response {
    let processed = run_blocking(move || encrypt_request(&request)).await;
    api_response(processed)
}

fn api_response(processed: Processed) -> Response {
    match processed {
        Ok(Ok(outcome)) => {
            tracing::info!(results = outcome.results.len(), "Encrypted message from API");
            Json(outcome_json(&outcome)).into_response()
        }
        Ok(Err(rejection)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(rejection_json(&rejection))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Encryption error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "errors": [{ "code": "internal", "message": INTERNAL_ERROR_MESSAGE }],
                })),
            )
                .into_response()
        }
    }
}

/// Copy buttons and submit-time form checks.
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
