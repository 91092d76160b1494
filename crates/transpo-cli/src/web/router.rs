//! Axum router configuration
//!
//! ```text
//! /
//! ├── GET  /                  - Encryption form
//! ├── POST /encrypt           - Form submission (urlencoded)
//! ├── POST /api/encrypt       - JSON API
//! ├── GET  /static/script.js  - Copy buttons and submit-time checks
//! └── GET  /health            - Liveness probe
//! ```

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{encrypt_api, encrypt_form, health, index, script};

/// Build the complete router. Handlers share no state.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/encrypt", post(encrypt_form))
        .route("/api/encrypt", post(encrypt_api))
        .route("/static/script.js", get(script))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/encrypt")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/encrypt")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let response = build_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"name="rail_fence_key""#));
        assert!(body.contains(r#"name="row_transposition_key""#));
    }

    #[tokio::test]
    async fn test_form_post_renders_both_results() {
        let response = build_router()
            .oneshot(form_request(
                "message=WE+ARE+DISCOVERED+FLEE+AT+ONCE&rail_fence_key=3&row_transposition_key=zebra",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("WECRLTEERDSOEEFEAOCAIVDEN"));
        assert!(body.contains("<code>ZEBRA</code>"));
        assert!(body.contains(r#"value="zebra""#));
    }

    #[tokio::test]
    async fn test_form_post_blank_key_is_ignored() {
        let response = build_router()
            .oneshot(form_request(
                "message=hello&rail_fence_key=2&row_transposition_key=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("HLOEL"));
        assert!(!body.contains("alert-error\""));
    }

    #[tokio::test]
    async fn test_form_post_empty_message_rejected() {
        let response = build_router()
            .oneshot(form_request("message=+++&rail_fence_key=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("Please enter a message to encrypt."));
    }

    #[tokio::test]
    async fn test_form_post_all_keys_invalid() {
        let response = build_router()
            .oneshot(form_request(
                "message=hi&rail_fence_key=1&row_transposition_key=a1",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("Rail Fence key must be at least 2."));
        assert!(body.contains("Row Transposition key must contain only letters."));
        assert!(body.contains("Please provide at least one valid key for encryption."));
    }

    #[tokio::test]
    async fn test_api_returns_json_outcome() {
        let response = build_router()
            .oneshot(json_request(serde_json::json!({
                "message": "MEET ME AT THE PARK",
                "row_transposition_key": "ZEBRA",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["results"][0]["cipher"], "row_transposition");
        assert_eq!(value["results"][0]["key"], "ZEBRA");
        assert_eq!(value["results"][0]["encrypted"], "MHKETAEAPTTRMEE");
    }

    #[tokio::test]
    async fn test_api_rejection_is_422() {
        let response = build_router()
            .oneshot(json_request(serde_json::json!({ "message": "hello" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let value: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["errors"][0]["code"], "no_valid_cipher_requested");
    }

    #[tokio::test]
    async fn test_script_served_as_javascript() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .uri("/static/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_script_checks_use_server_messages() {
        use transpo_core::{RailCountProblem, ValidationError};

        let response = build_router()
            .oneshot(
                Request::builder()
                    .uri("/static/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let script = body_string(response).await;

        for error in [
            ValidationError::EmptyMessage,
            ValidationError::NoValidCipherRequested,
            ValidationError::InvalidKeyFormat,
            RailCountProblem::NotANumber.into(),
            RailCountProblem::TooFew.into(),
            RailCountProblem::ExceedsMessage.into(),
        ] {
            assert!(script.contains(&error.to_string()), "missing {error}");
        }
        assert!(script.contains("event.preventDefault()"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}
