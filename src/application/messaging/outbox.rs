//! Ordered collection of outbound actions for one event

use crate::domain::entities::Outbound;

/// Collects what a handler wants sent, preserving emission order.
///
/// Multi-line texts become one message per line; blank lines are skipped.
#[derive(Debug)]
pub struct Outbox {
    channel: String,
    actions: Vec<Outbound>,
}

impl Outbox {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            actions: Vec::new(),
        }
    }

    /// Speak in the channel.
    pub fn say(&mut self, text: &str) {
        let channel = self.channel.clone();
        self.send(&channel, text);
    }

    /// Message a single user directly.
    pub fn tell(&mut self, nick: &str, text: &str) {
        self.send(nick, text);
    }

    pub fn send(&mut self, target: &str, text: &str) {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.actions.push(Outbound::message(target, line));
        }
    }

    pub fn push(&mut self, action: Outbound) {
        self.actions.push(action);
    }

    /// Whether `target` names the channel this outbox speaks in.
    pub fn is_channel(&self, target: &str) -> bool {
        target.eq_ignore_ascii_case(&self.channel)
    }

    pub fn actions(&self) -> &[Outbound] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Outbound> {
        self.actions
    }
}
