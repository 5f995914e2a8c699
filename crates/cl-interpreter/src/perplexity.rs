//! Perplexity backend — OpenAI-style chat completions.
//!
//! Calls `POST /chat/completions` with a fixed model and sampling constants.
//! The returned candidate text is expected to already be bare JSON, but the
//! validator never assumes that holds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::{DEFAULT_TIMEOUT_SECS, QueryBackend};
use crate::error::{InterpreterError, InterpreterResult};

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai";
const MODEL: &str = "sonar-pro";
const SYSTEM_MESSAGE: &str = "Be precise and concise.";

/// Chat-completion request body (only the fields we set).
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    stream: bool,
}

/// A single message in the chat request.
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion response (only the fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for the Perplexity chat-completions endpoint.
pub struct PerplexityBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl PerplexityBackend {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(
            api_key,
            PERPLEXITY_API_URL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Backend pointed at a custom endpoint, for tests and proxies.
    pub fn with_endpoint(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl QueryBackend for PerplexityBackend {
    async fn complete(&self, prompt: &str) -> InterpreterResult<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 1000,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(self.name(), self.timeout, e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(InterpreterError::Auth {
                provider: self.name(),
            });
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InterpreterError::Transport {
                provider: self.name(),
                message: format!("{status}: {detail}"),
            });
        }

        let chat: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| InterpreterError::Transport {
                    provider: self.name(),
                    message: format!("invalid response body: {e}"),
                })?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(InterpreterError::EmptyResponse {
                provider: self.name(),
            });
        }

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "perplexity"
    }
}

/// Map a reqwest failure onto the taxonomy, keeping timeouts distinct.
pub(crate) fn transport_error(
    provider: &'static str,
    timeout: Duration,
    e: reqwest::Error,
) -> InterpreterError {
    if e.is_timeout() {
        InterpreterError::Timeout {
            provider,
            secs: timeout.as_secs(),
        }
    } else {
        InterpreterError::Transport {
            provider,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper: build a chat-completions response body around `content`.
    fn chat_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "model": MODEL,
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": { "role": "assistant", "content": content }
            }]
        })
    }

    fn backend_for(server: &MockServer) -> PerplexityBackend {
        PerplexityBackend::with_endpoint(
            "test-key".into(),
            server.uri(),
            Duration::from_secs(2),
        )
    }

    #[tokio::test]
    async fn complete_returns_candidate_text() {
        let server = MockServer::start().await;
        let body = chat_response(r#"{"service":"ALL"}"#);
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({ "model": MODEL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let text = backend.complete("prompt text").await.unwrap();
        assert_eq!(text, r#"{"service":"ALL"}"#);
    }

    #[tokio::test]
    async fn complete_maps_401_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend.complete("prompt").await.unwrap_err();
        assert!(matches!(
            err,
            InterpreterError::Auth { provider: "perplexity" }
        ));
    }

    #[tokio::test]
    async fn complete_maps_500_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend.complete("prompt").await.unwrap_err();
        match err {
            InterpreterError::Transport { provider, message } => {
                assert_eq!(provider, "perplexity");
                assert!(message.contains("500"));
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn complete_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_response("{}"))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        // Client timeout is 2s, mock delays 10s.
        let backend = backend_for(&server);
        let err = backend.complete("prompt").await.unwrap_err();
        assert!(matches!(
            err,
            InterpreterError::Timeout { provider: "perplexity", secs: 2 }
        ));
    }

    #[tokio::test]
    async fn complete_rejects_empty_choices() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "model": MODEL, "choices": [] });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let err = backend.complete("prompt").await.unwrap_err();
        assert!(matches!(err, InterpreterError::EmptyResponse { .. }));
    }
}
