//! Message log
//!
//! A bounded queue of toned messages; the oldest message falls off when a
//! new one arrives at capacity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::MESSAGE_LOG_HEIGHT;

/// Display class of a message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tone {
    #[default]
    Info,
    /// Greeting on game start
    Welcome,
    /// Something hurt the player or a monster died
    Danger,
    /// The player hit something
    Attack,
    /// An attack did nothing
    Miss,
    /// The player died
    Death,
    /// A rejected action
    Warning,
    /// A successful pick-up or heal
    Success,
    /// A spell-like item effect
    Magic,
    /// Asking the player to choose a target
    Prompt,
    /// A status wore off
    Recovery,
    /// Stepping down to the next floor
    Descend,
}

/// One logged line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

/// Bounded message history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    lines: VecDeque<Message>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MESSAGE_LOG_HEIGHT)
    }
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(Message {
            text: text.into(),
            tone,
        });
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.lines.back()
    }

    /// Whether any kept message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|m| m.text.contains(needle))
    }
}
