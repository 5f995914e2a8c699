//! Gemini backend — generateContent over the Generative Language API.
//!
//! Gemini routinely wraps its JSON payload in Markdown code fences despite
//! instructions not to; the text is returned as-is and the shared validator
//! strips the fences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::{DEFAULT_TIMEOUT_SECS, QueryBackend};
use crate::error::{InterpreterError, InterpreterResult};
use crate::perplexity::transport_error;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";

/// generateContent request body (only the fields we set).
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// generateContent response (only the fields we need).
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiBackend {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(
            api_key,
            GEMINI_API_URL.to_string(),
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
impl QueryBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> InterpreterResult<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL);

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.2,
                top_p: 0.9,
                max_output_tokens: 1000,
            },
        };

        // Key travels in a header, never the URL.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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

        let generated: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| InterpreterError::Transport {
                    provider: self.name(),
                    message: format!("invalid response body: {e}"),
                })?;

        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.text));

        match text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(InterpreterError::EmptyResponse {
                provider: self.name(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
