use std::collections::VecDeque;

use crate::application::errors::CommandError;
use crate::domain::traits::roster::{same_nick, Roster};

/// A pending help request. Never modified after creation, only removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    requester: String,
    question: String,
}

impl QueueEntry {
    pub fn new(requester: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            requester: requester.into(),
            question: question.into(),
        }
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// FIFO of pending help requests, at most one per requester.
#[derive(Debug, Clone, Default)]
pub struct HelpQueue {
    entries: VecDeque<QueueEntry>,
}

impl HelpQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request to the tail and return the new queue length.
    pub fn enqueue(
        &mut self,
        requester: impl Into<String>,
        question: impl Into<String>,
    ) -> Result<usize, CommandError> {
        let requester = requester.into();
        if self.contains(&requester) {
            return Err(CommandError::DuplicateRequest);
        }
        self.entries.push_back(QueueEntry::new(requester, question));
        Ok(self.entries.len())
    }

    /// Pop the first request whose requester is still in the channel.
    ///
    /// Requests from members who have left are dropped for good on the way.
    pub fn dequeue(&mut self, roster: &dyn Roster) -> Option<QueueEntry> {
        while let Some(entry) = self.entries.pop_front() {
            if roster.is_member(&entry.requester) {
                return Some(entry);
            }
            tracing::debug!("Dropping request from departed user {}", entry.requester);
        }
        None
    }

    /// Remove every request; returns how many were cleared.
    pub fn purge(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }

    pub fn contains(&self, requester: &str) -> bool {
        self.entries.iter().any(|e| same_nick(&e.requester, requester))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
