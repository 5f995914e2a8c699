//! E2E tests for failure paths: every violation surfaces as a typed error
//! and no structured query ever reaches the caller.

mod helpers;

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cl_interpreter::{Interpreter, InterpreterError, PerplexityBackend, Provider};
use cl_protocol::ValidationError;

use helpers::{gemini_interpreter, mount_gemini, mount_perplexity, perplexity_interpreter};

/// Reversed date range is rejected even though the model was told to keep
/// start before end.
#[tokio::test]
async fn e2e_reversed_dates_rejected() {
    let server = MockServer::start().await;
    mount_perplexity(
        &server,
        r#"{"service":"ALL","start_date":"2025-07-15","end_date":"2025-07-08","granularity":"DAILY"}"#,
    )
    .await;

    let interpreter = perplexity_interpreter(&server);
    let err = interpreter.interpret("costs last week").await.unwrap_err();
    assert!(matches!(
        err,
        InterpreterError::Invalid(ValidationError::InvalidDateRange { .. })
    ));
}

/// A granularity outside the enumeration is never coerced to a default.
#[tokio::test]
async fn e2e_unknown_granularity_rejected() {
    let server = MockServer::start().await;
    mount_gemini(
        &server,
        r#"{"service":"ALL","start_date":"2025-07-01","end_date":"2025-07-08","granularity":"WEEKLY"}"#,
    )
    .await;

    let interpreter = gemini_interpreter(&server);
    let err = interpreter.interpret("weekly costs").await.unwrap_err();
    match err {
        InterpreterError::Invalid(ValidationError::InvalidGranularity { value }) => {
            assert_eq!(value, "WEEKLY");
        }
        other => panic!("expected InvalidGranularity, got {other:?}"),
    }
}

/// A missing key is reported by name.
#[tokio::test]
async fn e2e_missing_field_named() {
    let server = MockServer::start().await;
    mount_perplexity(
        &server,
        r#"{"service":"ALL","start_date":"2025-07-01","granularity":"DAILY"}"#,
    )
    .await;

    let interpreter = perplexity_interpreter(&server);
    let err = interpreter.interpret("costs").await.unwrap_err();
    match err {
        InterpreterError::Invalid(ValidationError::MissingField { field }) => {
            assert_eq!(field, "end_date");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

/// Prose instead of JSON is a malformed response carrying the cleaned text.
#[tokio::test]
async fn e2e_prose_response_is_malformed() {
    let server = MockServer::start().await;
    mount_gemini(&server, "I could not determine a date range for that.").await;

    let interpreter = gemini_interpreter(&server);
    let err = interpreter.interpret("???").await.unwrap_err();
    match err {
        InterpreterError::Invalid(ValidationError::MalformedResponse { text }) => {
            assert!(text.contains("date range"));
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

/// A rejected credential is an auth error, not a generic transport failure.
#[tokio::test]
async fn e2e_rejected_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let interpreter = perplexity_interpreter(&server);
    let err = interpreter.interpret("costs").await.unwrap_err();
    assert!(matches!(err, InterpreterError::Auth { .. }));
}

/// A hung backend hits the per-request deadline instead of stalling forever.
#[tokio::test]
async fn e2e_hung_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let interpreter = Interpreter::with_backend(Box::new(PerplexityBackend::with_endpoint(
        "test-key".into(),
        server.uri(),
        Duration::from_secs(1),
    )));
    let err = interpreter.interpret("costs").await.unwrap_err();
    assert!(matches!(err, InterpreterError::Timeout { secs: 1, .. }));
}

/// Provider selectors outside the closed set never reach a backend.
#[tokio::test]
async fn e2e_unsupported_provider_selector() {
    let err = Provider::parse("chatgpt").unwrap_err();
    match err {
        InterpreterError::UnsupportedProvider { value } => assert_eq!(value, "chatgpt"),
        other => panic!("expected UnsupportedProvider, got {other:?}"),
    }
}

/// An empty candidate list is an explicit error, not an empty query.
#[tokio::test]
async fn e2e_empty_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(helpers::GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let interpreter = gemini_interpreter(&server);
    let err = interpreter.interpret("costs").await.unwrap_err();
    assert!(matches!(err, InterpreterError::EmptyResponse { .. }));
}
