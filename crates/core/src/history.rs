//! Bounded per-conversation history.

use crate::Exchange;
use compact_str::CompactString;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Maximum exchanges retained per conversation.
pub const HISTORY_CAPACITY: usize = 10;

/// Fixed-capacity conversation history with FIFO eviction.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<Exchange>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append an exchange, evicting the oldest entry at capacity.
    pub fn push(&mut self, exchange: Exchange) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(exchange);
    }

    /// Number of retained exchanges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the retained exchanges, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter()
    }
}

/// Per-conversation history store keyed by an opaque conversation id.
///
/// Uses `&self` with interior mutability so a single store can be shared
/// by concurrent handler tasks. The mutex guards map integrity only: a
/// push/snapshot pair around an outbound HTTP call is not atomic, so two
/// concurrent messages in the same conversation may interleave their
/// appends in an unspecified order.
#[derive(Debug, Default)]
pub struct HistoryStore {
    histories: Mutex<HashMap<CompactString, History>>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the conversation's history, creating it on first use.
    pub fn push(&self, conversation: impl Into<CompactString>, exchange: Exchange) {
        let mut histories = self.histories.lock().unwrap();
        histories.entry(conversation.into()).or_default().push(exchange);
    }

    /// Copy of the conversation's current history, oldest first.
    ///
    /// Unknown conversations yield an empty vec without creating an entry.
    pub fn snapshot(&self, conversation: &str) -> Vec<Exchange> {
        let histories = self.histories.lock().unwrap();
        histories
            .get(conversation)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of retained exchanges for a conversation.
    pub fn len(&self, conversation: &str) -> usize {
        let histories = self.histories.lock().unwrap();
        histories.get(conversation).map(History::len).unwrap_or(0)
    }

    /// Whether the store has no conversations at all.
    pub fn is_empty(&self) -> bool {
        self.histories.lock().unwrap().is_empty()
    }
}
