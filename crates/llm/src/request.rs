//! The request body for an OpenAI-compatible completions endpoint.

use crate::Config;
use ncore::Exchange;
use serde::{Deserialize, Serialize};

/// The request body for the completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model we are using
    pub model: String,

    /// The messages to send to the endpoint
    pub messages: Vec<Message>,

    /// The temperature to use for the response
    pub temperature: f32,

    /// The maximum number of tokens to generate, -1 for unlimited
    pub max_tokens: i64,

    /// Whether to stream the response
    pub stream: bool,
}

impl Request {
    /// Build a request body from a conversation history.
    ///
    /// The system instruction is always the first message, exactly once.
    /// Every exchange is flattened onto the `user` wire role with the
    /// speaker name prefixed as `"{name}: {content}"` when a name is
    /// recorded: the target endpoints only distinguish two roles, so the
    /// speaker identity travels in the content instead.
    pub fn from_history(config: &Config, history: &[Exchange]) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(&config.system));

        for exchange in history {
            let content = if exchange.name.is_empty() {
                exchange.content.clone()
            } else {
                format!("{}: {}", exchange.name, exchange.content)
            };
            messages.push(Message::user(content));
        }

        Self {
            model: config.model.clone(),
            messages,
            temperature: config.temperature,
            max_tokens: config.tokens,
            stream: false,
        }
    }
}

/// A message as transmitted on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message
    pub role: Role,

    /// The content of the message
    pub content: String,
}

impl Message {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The wire role of a message
///
/// Only `system` and `user` are ever emitted; see
/// [`Request::from_history`] for why assistant turns collapse onto
/// `user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// The system role
    #[serde(rename = "system")]
    System,
    /// The user role
    #[serde(rename = "user")]
    User,
}
