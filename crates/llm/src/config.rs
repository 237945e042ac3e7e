//! Configuration for a chat completion

use serde::{Deserialize, Serialize};

/// Chat completion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// The model to use
    pub model: String,

    /// The system instruction injected at the head of every request
    pub system: String,

    /// The temperature of the model
    pub temperature: f32,

    /// The number of max tokens to generate, -1 for unlimited
    pub tokens: i64,
}

impl Config {
    /// Create a new configuration
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the system instruction for the configuration
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "local-model".into(),
            system: "You are a helpful assistant.".into(),
            temperature: 0.5,
            tokens: -1,
        }
    }
}
