//! Bot configuration loaded from TOML.

use anyhow::{Context, Result, bail};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default completions endpoint (LM Studio's local server).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:1234/v1/chat/completions";

/// Top-level bot configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Discord connection configuration.
    pub discord: DiscordConfig,
    /// Completion endpoint configuration.
    pub llm: LlmConfig,
    /// Bot persona configuration.
    pub bot: PersonaConfig,
}

/// Discord connection configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Bot token (supports `${ENV_VAR}` expansion).
    pub token: String,
}

/// Completion endpoint configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Completions endpoint URL.
    pub endpoint: String,
    /// Model identifier as known to the endpoint.
    pub model: String,
    /// System instruction injected at the head of every request.
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: "local-model".to_owned(),
            system_prompt: "You are a helpful assistant.".to_owned(),
        }
    }
}

/// Bot persona configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Display name recorded on the bot's own exchanges.
    pub name: CompactString,
    /// Wake word that triggers a reaction without a mention.
    pub wake_word: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "Tobi".into(),
            wake_word: "tobi".into(),
        }
    }
}

impl BotConfig {
    /// Parse a TOML string into a `BotConfig`, expanding environment
    /// variables, and validate it.
    ///
    /// A missing or empty Discord token is fatal: the bot cannot connect
    /// without one, so startup must not proceed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        if config.discord.token.trim().is_empty() {
            bail!("discord token is missing or empty");
        }
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }
}

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
