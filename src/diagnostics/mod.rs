//! Bounded log of human-readable parse failure messages.
//!
//! Only the most recent `CAPACITY` messages survive; once full, each new
//! message overwrites the oldest. Messages are read back newest first.

use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Number of messages retained.
pub const CAPACITY: usize = 20;

/// Longest message retained, in bytes.
pub const MESSAGE_LIMIT: usize = 255;

/// Returned by `pop_last_error()` when there is nothing to report.
pub const NO_ERROR: &str = "No error.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    cursor: usize,
    count: usize,
}

impl Journal {
    pub const fn new() -> Journal {
        Journal {
            entries: Vec::new(),
            cursor: 0,
            count: 0,
        }
    }

    /// Record a message at the write cursor, truncating it if necessary.
    pub fn log(&mut self, message: &str) {
        let message = truncate(message, MESSAGE_LIMIT).to_string();

        if self.cursor < self
            .entries
            .len()
        {
            self.entries[self.cursor] = message;
        } else {
            self.entries
                .push(message);
        }

        if self.count < CAPACITY {
            self.count += 1;
        }
        self.cursor = (self.cursor + 1) % CAPACITY;
    }

    /// Remove and return the most recently written message.
    pub fn pop_last(&mut self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.cursor = (self.cursor + CAPACITY - 1) % CAPACITY;

        Some(std::mem::take(&mut self.entries[self.cursor]))
    }

    /// Remove every retained message, newest first.
    pub fn drain(&mut self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.count);
        while let Some(message) = self.pop_last() {
            result.push(message);
        }
        result
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Journal {
    fn default() -> Self {
        Journal::new()
    }
}

// Cut at the last character boundary at or below the limit.
fn truncate(message: &str, limit: usize) -> &str {
    if message.len() <= limit {
        return message;
    }
    let mut end = limit;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

static JOURNAL: Mutex<Journal> = Mutex::new(Journal::new());

// A panic while holding the lock cannot leave the ring in a state worse
// than a missing message, so poisoning is ignored.
fn journal() -> MutexGuard<'static, Journal> {
    JOURNAL
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Append a message to the process-wide log.
pub fn log(message: &str) {
    debug!("diagnostic: {}", message);
    journal().log(message);
}

/// Remove and return the newest message in the process-wide log, or
/// `None` if it is empty.
pub fn pop_last() -> Option<String> {
    journal().pop_last()
}

/// Remove and return the newest message in the process-wide log, or the
/// "No error." sentinel if it is empty.
pub fn pop_last_error() -> String {
    pop_last().unwrap_or_else(|| NO_ERROR.to_string())
}

/// Remove all messages from the process-wide log, newest first.
pub fn drain() -> Vec<String> {
    journal().drain()
}
