//! Player-facing message log
//!
//! Newest entries sit at the front. Pushing past capacity silently drops the
//! oldest entry.

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::types::Tick;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameMessage {
    pub id: u64,
    /// Tick at which the message was logged
    pub timestamp: Tick,
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageLog {
    entries: VecDeque<GameMessage>,
    capacity: usize,
    next_id: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_id: 0,
        }
    }

    /// Prepend a message, evicting the oldest if the log is full
    pub fn push(&mut self, timestamp: Tick, kind: MessageKind, text: impl Into<String>) {
        let message = GameMessage {
            id: self.next_id,
            timestamp,
            text: text.into(),
            kind,
        };
        self.next_id += 1;
        self.entries.push_front(message);
        self.entries.truncate(self.capacity);
    }

    pub fn newest(&self) -> Option<&GameMessage> {
        self.entries.front()
    }

    /// Messages from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &GameMessage> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&GameMessage> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
