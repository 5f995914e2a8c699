//! Pipeline entry point: prompt → backend call → shared validation.

use chrono::{NaiveDate, Utc};

use cl_protocol::{StructuredQuery, validate};

use crate::backend::QueryBackend;
use crate::error::InterpreterResult;
use crate::gemini::GeminiBackend;
use crate::perplexity::PerplexityBackend;
use crate::prompt::build_prompt;
use crate::provider::Provider;

/// One-shot query interpreter bound to a single backend.
///
/// Holds the credential only inside the backend for the invocation's
/// duration; the credential is never logged or persisted here.
pub struct Interpreter {
    backend: Box<dyn QueryBackend>,
}

impl Interpreter {
    /// Interpreter for the given provider with its production endpoint.
    pub fn new(provider: Provider, api_key: String) -> Self {
        let backend: Box<dyn QueryBackend> = match provider {
            Provider::Perplexity => Box::new(PerplexityBackend::new(api_key)),
            Provider::Gemini => Box::new(GeminiBackend::new(api_key)),
        };
        Self { backend }
    }

    /// Interpreter over an explicit backend (tests, custom endpoints).
    pub fn with_backend(backend: Box<dyn QueryBackend>) -> Self {
        Self { backend }
    }

    /// Interpret a free-text cost question into a validated query.
    pub async fn interpret(&self, user_query: &str) -> InterpreterResult<StructuredQuery> {
        self.interpret_at(user_query, Utc::now().date_naive()).await
    }

    /// Same as [`interpret`](Self::interpret) with an explicit "today", so
    /// default-date behavior is deterministic under test.
    pub async fn interpret_at(
        &self,
        user_query: &str,
        today: NaiveDate,
    ) -> InterpreterResult<StructuredQuery> {
        let prompt = build_prompt(user_query, today);

        tracing::debug!(provider = self.backend.name(), "requesting interpretation");
        let raw = self.backend.complete(&prompt).await?;
        tracing::debug!(provider = self.backend.name(), raw = %raw, "raw model response");

        let query = validate(&raw)?;
        tracing::info!(
            provider = self.backend.name(),
            service = %query.service,
            start_date = %query.start_date,
            end_date = %query.end_date,
            granularity = %query.granularity,
            "query interpreted"
        );
        Ok(query)
    }
}
