//! The closed set of supported language-model backends.

use std::str::FromStr;

use crate::error::InterpreterError;

/// Supported backend identities. Credentials are stored per provider and the
/// `--llm` flag selects one for the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Perplexity,
    Gemini,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Perplexity, Provider::Gemini];

    /// Lowercase identity used in flags and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Perplexity => "perplexity",
            Provider::Gemini => "gemini",
        }
    }

    /// Human-facing name for prompts and status lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Perplexity => "Perplexity",
            Provider::Gemini => "Gemini",
        }
    }

    /// Parse a provider selector. Anything outside the closed set is an
    /// `UnsupportedProvider` error, never a fallback to some default.
    pub fn parse(value: &str) -> Result<Self, InterpreterError> {
        match value.trim().to_lowercase().as_str() {
            "perplexity" => Ok(Provider::Perplexity),
            "gemini" => Ok(Provider::Gemini),
            _ => Err(InterpreterError::UnsupportedProvider {
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for Provider {
    type Err = InterpreterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::parse(s)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
