//! Structured-output contract violations.

use thiserror::Error;

/// Errors raised while turning raw model text into a `StructuredQuery`.
///
/// Every variant is terminal for the current invocation; the caller decides
/// whether to re-prompt the user or abort. Nothing here is ever coerced to a
/// default value.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The cleaned response text could not be parsed as JSON. Carries the
    /// cleaned text so the failure is diagnosable from the error alone.
    #[error("response is not valid JSON: {text}")]
    MalformedResponse { text: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid granularity value: {value:?}")]
    InvalidGranularity { value: String },

    #[error("{field} is not a date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("start_date {start} is after end_date {end}")]
    InvalidDateRange { start: String, end: String },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;
