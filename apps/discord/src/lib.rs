//! Narwhal Discord relay.
//!
//! Listens for messages, forwards the recent conversation to a local
//! completion endpoint, and relays the reply back to the originating
//! channel. The Discord gateway connection, session handling, and event
//! delivery are all owned by serenity; this crate is the glue between
//! its event loop, the history store, and the completion relay.

pub use {
    chunk::{MESSAGE_LIMIT, chunk_reply},
    config::{BotConfig, expand_env_vars},
    handler::{Handler, OFFLINE_NOTICE, record_outcome},
    trigger::{contains_wake_word, should_react, strip_mention},
};

mod chunk;
mod config;
mod handler;
mod trigger;
