//! Shared helpers for wiremock-backed interpreter tests.
//!
//! Each helper speaks one provider's wire shape so the tests exercise the
//! real transport + validation path end-to-end.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cl_interpreter::{GeminiBackend, Interpreter, PerplexityBackend};

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// Mount a Perplexity-shaped chat-completions response around `content`.
pub async fn mount_perplexity(server: &MockServer, content: &str) {
    let body = serde_json::json!({
        "model": "sonar-pro",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": { "role": "assistant", "content": content }
        }]
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

/// Mount a Gemini-shaped generateContent response around `text`.
pub async fn mount_gemini(server: &MockServer, text: &str) {
    let body = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    });
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

/// Interpreter over a Perplexity backend pointed at the mock server.
pub fn perplexity_interpreter(server: &MockServer) -> Interpreter {
    Interpreter::with_backend(Box::new(PerplexityBackend::with_endpoint(
        "test-key".into(),
        server.uri(),
        Duration::from_secs(2),
    )))
}

/// Interpreter over a Gemini backend pointed at the mock server.
pub fn gemini_interpreter(server: &MockServer) -> Interpreter {
    Interpreter::with_backend(Box::new(GeminiBackend::with_endpoint(
        "test-key".into(),
        server.uri(),
        Duration::from_secs(2),
    )))
}
