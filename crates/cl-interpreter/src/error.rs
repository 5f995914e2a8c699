//! Interpretation error taxonomy.

use thiserror::Error;

use cl_protocol::ValidationError;

/// Errors raised while obtaining and validating a model interpretation.
///
/// None of these ever substitute a default structured query. Every failure
/// propagates to the caller, which decides whether to re-prompt or abort.
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("{provider} transport error: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    /// The backend rejected the credential (HTTP 401/403).
    #[error("{provider} rejected the API key")]
    Auth { provider: &'static str },

    #[error("{provider} request timed out after {secs}s")]
    Timeout { provider: &'static str, secs: u64 },

    #[error("unsupported LLM provider: {value:?} (expected perplexity or gemini)")]
    UnsupportedProvider { value: String },

    /// The backend answered but carried no candidate text.
    #[error("{provider} returned no completion text")]
    EmptyResponse { provider: &'static str },

    /// Contract violation detected by the shared validator.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Convenience alias for interpretation results.
pub type InterpreterResult<T> = Result<T, InterpreterError>;
