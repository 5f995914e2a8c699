//! Persisted CLI configuration (`~/.costlens/config.json`).
//!
//! The config file is the only place credentials live on disk. Core crates
//! never read or write it; they receive plain values pulled out of this
//! struct for the duration of one invocation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use cl_interpreter::Provider;

const CONFIG_DIR: &str = ".costlens";
const CONFIG_FILE: &str = "config.json";

/// On-disk key-value record: provider credentials, default region, and the
/// last-used provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perplexity_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_provider: Option<String>,
}

impl CliConfig {
    /// Default config path under the user's home directory.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`.
    ///
    /// A missing or empty file yields an empty config; invalid JSON is a
    /// hard error naming the file so the user can fix or delete it.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if raw.trim().is_empty() {
            tracing::warn!(path = %path.display(), "config file is empty, starting fresh");
            return Ok(Self::default());
        }
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => bail!(
                "config file {} is invalid JSON ({e}); fix or delete it",
                path.display()
            ),
        }
    }

    /// Persist as pretty JSON, creating the parent directory first.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn api_key_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Perplexity => self.perplexity_api_key.as_deref(),
            Provider::Gemini => self.gemini_api_key.as_deref(),
        }
    }

    pub fn set_api_key(&mut self, provider: Provider, key: String) {
        match provider {
            Provider::Perplexity => self.perplexity_api_key = Some(key),
            Provider::Gemini => self.gemini_api_key = Some(key),
        }
    }

    /// Provider for this invocation: the explicit flag wins, then the
    /// last-used provider, then perplexity.
    pub fn resolve_provider(&self, flag: Option<Provider>) -> Provider {
        if let Some(provider) = flag {
            return provider;
        }
        self.last_provider
            .as_deref()
            .and_then(|s| Provider::parse(s).ok())
            .unwrap_or(Provider::Perplexity)
    }
}
