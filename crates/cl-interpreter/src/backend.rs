//! Backend capability abstraction.

use async_trait::async_trait;

use crate::error::InterpreterResult;

/// Default per-request deadline for model calls. A hung backend must never
/// stall the whole pipeline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A language-model backend: accept a prompt, return response text.
///
/// Implementations own transport and response-shape concerns only. They do
/// not parse JSON, strip code fences, or enforce the enumeration; that is
/// the validator's job, written once against the shared contract.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Send the instruction prompt and return the raw response text.
    async fn complete(&self, prompt: &str) -> InterpreterResult<String>;

    /// Provider name for logging and error messages.
    fn name(&self) -> &'static str;
}
