//! Core types for the Narwhal relay.
//!
//! An [`Exchange`] is one recorded turn in a conversation; the
//! [`HistoryStore`] keeps a bounded rolling window of them per
//! conversation. The system instruction is never stored here — it is
//! injected at request-build time by the llm crate.

pub use {
    history::{HISTORY_CAPACITY, History, HistoryStore},
    message::{Exchange, Role},
};

mod history;
mod message;
