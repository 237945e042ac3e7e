//! The response body from the completions endpoint.

use serde::Deserialize;

/// The response body from the completions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// The completion choices
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Response {
    /// The generated text of the first choice, if any.
    pub fn text(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: ChoiceMessage,
}

/// The generated message within a choice
///
/// `content` is required: a choice without it is a malformed body, not
/// an empty reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// The content of the message
    pub content: String,
}
