//! Completion relay for the Narwhal bot.
//!
//! Builds an OpenAI-compatible chat-completions request from a
//! conversation history and performs one outbound HTTP call. Failures
//! come back as an explicit [`CompletionError`] rather than an opaque
//! error chain, so the handler can branch on them.

pub use {
    completions::Completions,
    config::Config,
    error::CompletionError,
    request::{Message, Request, Role},
    response::{Choice, ChoiceMessage, Response},
    reqwest::{self, Client},
};

mod completions;
mod config;
mod error;
mod request;
mod response;
