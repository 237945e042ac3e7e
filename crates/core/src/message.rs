//! Conversation exchange types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One recorded turn in a conversation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Exchange {
    /// The role of the speaker
    pub role: Role,

    /// Display name of the speaker, empty when unknown
    #[serde(default)]
    pub name: CompactString,

    /// The text content of the turn
    pub content: String,
}

impl Exchange {
    /// Create a new user exchange
    pub fn user(name: impl Into<CompactString>, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a new assistant exchange
    pub fn assistant(name: impl Into<CompactString>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            name: name.into(),
            content: content.into(),
        }
    }
}

/// The role of an exchange
///
/// Only conversation turns are recorded, so there is no system variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// The user role
    #[serde(rename = "user")]
    User,
    /// The assistant role
    #[serde(rename = "assistant")]
    Assistant,
}
