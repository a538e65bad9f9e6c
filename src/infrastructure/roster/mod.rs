//! In-memory channel roster
//!
//! Adapters keep one of these current from whatever the transport reports,
//! and hand it to the core as a read-only [`Roster`].

use std::collections::BTreeMap;

use crate::domain::traits::roster::{fold_nick, Roster};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Member {
    nick: String,
    operator: bool,
    voiced: bool,
}

/// Channel members keyed by folded nickname.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    members: BTreeMap<String, Member>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, nick: impl Into<String>) -> Self {
        self.join(nick);
        self
    }

    /// Add a member without flags; an existing member keeps theirs.
    pub fn join(&mut self, nick: impl Into<String>) {
        let nick = nick.into();
        self.members.entry(fold_nick(&nick)).or_insert(Member {
            nick,
            operator: false,
            voiced: false,
        });
    }

    /// Remove a member; returns whether they were present.
    pub fn part(&mut self, nick: &str) -> bool {
        self.members.remove(&fold_nick(nick)).is_some()
    }

    /// Follow a nickname change, keeping flags.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) {
        if let Some(mut member) = self.members.remove(&fold_nick(old)) {
            member.nick = new.into();
            self.members.insert(fold_nick(&member.nick), member);
        }
    }

    /// Returns false when `nick` is not a member.
    pub fn set_operator(&mut self, nick: &str, operator: bool) -> bool {
        match self.members.get_mut(&fold_nick(nick)) {
            Some(member) => {
                member.operator = operator;
                true
            }
            None => false,
        }
    }

    /// Returns false when `nick` is not a member.
    pub fn set_voiced(&mut self, nick: &str, voiced: bool) -> bool {
        match self.members.get_mut(&fold_nick(nick)) {
            Some(member) => {
                member.voiced = voiced;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn member(&self, nick: &str) -> Option<&Member> {
        self.members.get(&fold_nick(nick))
    }
}

impl Roster for MemoryRoster {
    fn is_member(&self, nick: &str) -> bool {
        self.member(nick).is_some()
    }

    fn is_operator(&self, nick: &str) -> bool {
        self.member(nick).is_some_and(|m| m.operator)
    }

    fn is_voiced(&self, nick: &str) -> bool {
        self.member(nick).is_some_and(|m| m.voiced)
    }

    fn voiced_members(&self) -> Vec<String> {
        self.members
            .values()
            .filter(|m| m.voiced)
            .map(|m| m.nick.clone())
            .collect()
    }
}
