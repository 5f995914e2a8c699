//! Query interpretation for CostLens.
//!
//! Sends the user's free-text cost question plus a fixed instruction prompt
//! to one of the supported language-model backends and validates the reply
//! against the shared structured-query contract. The backends only move
//! text; every contract check lives in `cl-protocol`.

pub mod backend;
pub mod error;
pub mod gemini;
pub mod interpreter;
pub mod perplexity;
pub mod prompt;
pub mod provider;

pub use backend::{DEFAULT_TIMEOUT_SECS, QueryBackend};
pub use error::{InterpreterError, InterpreterResult};
pub use gemini::GeminiBackend;
pub use interpreter::Interpreter;
pub use perplexity::PerplexityBackend;
pub use provider::Provider;
