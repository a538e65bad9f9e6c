//! IRC session state: own nickname, channel roster, and event translation

use crate::domain::entities::Event;
use crate::domain::traits::roster::same_nick;
use crate::infrastructure::roster::MemoryRoster;
use super::protocol::{self, IrcMessage};

/// What the adapter should do after a line is ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Hand an event to the core.
    Event(Event),
    /// Write a protocol line back to the server.
    Reply(String),
    /// The server is closing the link.
    Closed,
    Nothing,
}

/// Tracks connection-level state from the server's lines.
#[derive(Debug, Clone)]
pub struct IrcSession {
    nickname: String,
    channel: String,
    roster: MemoryRoster,
}

impl IrcSession {
    pub fn new(nickname: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            channel: channel.into(),
            roster: MemoryRoster::new(),
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn roster(&self) -> &MemoryRoster {
        &self.roster
    }

    fn is_channel(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.channel)
    }

    fn is_me(&self, nick: &str) -> bool {
        same_nick(nick, &self.nickname)
    }

    /// Update state from one raw line.
    pub fn ingest(&mut self, line: &str) -> Reaction {
        let Some(msg) = IrcMessage::parse(line) else {
            tracing::warn!("Unparseable line from server: {:?}", line);
            return Reaction::Nothing;
        };

        match msg.command.as_str() {
            "PING" => Reaction::Reply(protocol::pong(msg.param(0).unwrap_or_default())),
            "ERROR" => Reaction::Closed,
            "001" => {
                if let Some(confirmed) = msg.param(0) {
                    self.nickname = confirmed.to_string();
                }
                Reaction::Event(Event::Welcome)
            }
            "433" => Reaction::Event(Event::NickCollision),
            "353" => {
                if let (Some(channel), Some(names)) = (msg.param(2), msg.param(3)) {
                    if self.is_channel(channel) {
                        self.add_names(names);
                    }
                }
                Reaction::Nothing
            }
            "JOIN" => {
                if let (Some(nick), Some(channel)) = (msg.source_nick(), msg.param(0)) {
                    if self.is_channel(channel) {
                        if self.is_me(nick) {
                            // A NAMES listing follows our own join
                            self.roster.clear();
                        } else {
                            self.roster.join(nick);
                        }
                    }
                }
                Reaction::Nothing
            }
            "PART" => {
                if let (Some(nick), Some(channel)) = (msg.source_nick(), msg.param(0)) {
                    if self.is_channel(channel) {
                        self.leave(nick);
                    }
                }
                Reaction::Nothing
            }
            "KICK" => {
                if let (Some(channel), Some(nick)) = (msg.param(0), msg.param(1)) {
                    if self.is_channel(channel) {
                        self.leave(nick);
                    }
                }
                Reaction::Nothing
            }
            "QUIT" => {
                if let Some(nick) = msg.source_nick() {
                    self.roster.part(nick);
                }
                Reaction::Nothing
            }
            "NICK" => {
                if let (Some(old), Some(new)) = (msg.source_nick(), msg.param(0)) {
                    if self.is_me(old) {
                        self.nickname = new.to_string();
                    }
                    self.roster.rename(old, new);
                }
                Reaction::Nothing
            }
            "MODE" => {
                if let Some(target) = msg.param(0) {
                    if self.is_channel(target) && msg.params.len() > 1 {
                        self.apply_modes(&msg.params[1], &msg.params[2..]);
                    }
                }
                Reaction::Nothing
            }
            "PRIVMSG" => self.privmsg(&msg),
            _ => Reaction::Nothing,
        }
    }

    fn privmsg(&self, msg: &IrcMessage) -> Reaction {
        let (Some(sender), Some(target), Some(text)) = (msg.source_nick(), msg.param(0), msg.param(1))
        else {
            return Reaction::Nothing;
        };
        // CTCP requests (ACTION, VERSION, ...) are not commands
        if text.starts_with('\u{1}') {
            return Reaction::Nothing;
        }

        if self.is_channel(target) {
            Reaction::Event(Event::public(sender, text))
        } else if self.is_me(target) {
            Reaction::Event(Event::private(sender, text))
        } else {
            Reaction::Nothing
        }
    }

    fn leave(&mut self, nick: &str) {
        if self.is_me(nick) {
            self.roster.clear();
        } else {
            self.roster.part(nick);
        }
    }

    fn add_names(&mut self, names: &str) {
        for entry in names.split_whitespace() {
            let nick = entry.trim_start_matches(['@', '+', '%', '~', '&']);
            if nick.is_empty() {
                continue;
            }
            let flags = &entry[..entry.len() - nick.len()];
            self.roster.join(nick);
            if flags.contains('@') {
                self.roster.set_operator(nick, true);
            }
            if flags.contains('+') {
                self.roster.set_voiced(nick, true);
            }
        }
    }

    fn apply_modes(&mut self, modes: &str, args: &[String]) {
        let mut adding = true;
        let mut args = args.iter();
        for mode in modes.chars() {
            match mode {
                '+' => adding = true,
                '-' => adding = false,
                'o' => {
                    if let Some(nick) = args.next() {
                        self.roster.set_operator(nick, adding);
                    }
                }
                'v' => {
                    if let Some(nick) = args.next() {
                        self.roster.set_voiced(nick, adding);
                    }
                }
                'b' | 'e' | 'I' | 'k' | 'h' | 'q' | 'a' => {
                    args.next();
                }
                'l' if adding => {
                    args.next();
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::Roster;

    fn session() -> IrcSession {
        let mut session = IrcSession::new("deskbot", "#help");
        session.ingest(":deskbot!d@host JOIN #help");
        session.ingest(":srv 353 deskbot = #help :deskbot @op +vol alice");
        session
    }

    #[test]
    fn test_ping_gets_pong() {
        let mut s = IrcSession::new("deskbot", "#help");
        assert_eq!(s.ingest("PING :abc"), Reaction::Reply("PONG :abc".to_string()));
    }

    #[test]
    fn test_welcome_and_collision() {
        let mut s = IrcSession::new("deskbot", "#help");
        assert_eq!(s.ingest(":srv 433 * deskbot :Nickname is already in use"), Reaction::Event(Event::NickCollision));
        assert_eq!(s.ingest(":srv 001 deskbot_ :Welcome"), Reaction::Event(Event::Welcome));
        assert_eq!(s.nickname(), "deskbot_");
    }

    #[test]
    fn test_names_reply_sets_flags() {
        let s = session();
        assert!(s.roster().is_operator("op"));
        assert!(s.roster().is_voiced("vol"));
        assert!(s.roster().is_member("alice"));
        assert!(!s.roster().is_voiced("alice"));
    }

    #[test]
    fn test_membership_follows_join_part_quit_kick() {
        let mut s = session();
        s.ingest(":bob!b@h JOIN #help");
        assert!(s.roster().is_member("bob"));
        s.ingest(":bob!b@h PART #help :bye");
        assert!(!s.roster().is_member("bob"));
        s.ingest(":alice!a@h QUIT :gone");
        assert!(!s.roster().is_member("alice"));
        s.ingest(":op!o@h KICK #help vol :out");
        assert!(!s.roster().is_member("vol"));
    }

    #[test]
    fn test_mode_changes_flags() {
        let mut s = session();
        s.ingest(":op!o@h MODE #help +vb-o alice *!*@spam op");
        assert!(s.roster().is_voiced("alice"));
        assert!(!s.roster().is_operator("op"));
        s.ingest(":op!o@h MODE #help -v vol");
        assert!(!s.roster().is_voiced("vol"));
    }

    #[test]
    fn test_nick_change_renames_member_and_self() {
        let mut s = session();
        s.ingest(":vol!v@h NICK :volunteer");
        assert!(s.roster().is_voiced("volunteer"));
        s.ingest(":deskbot!d@h NICK deskbot2");
        assert_eq!(s.nickname(), "deskbot2");
    }

    #[test]
    fn test_privmsg_routing() {
        let mut s = session();
        assert_eq!(
            s.ingest(":alice!a@h PRIVMSG #help :!stats"),
            Reaction::Event(Event::public("alice", "!stats"))
        );
        assert_eq!(
            s.ingest(":alice!a@h PRIVMSG DeskBot :help me"),
            Reaction::Event(Event::private("alice", "help me"))
        );
        assert_eq!(
            s.ingest(":alice!a@h PRIVMSG #help :\u{1}ACTION waves\u{1}"),
            Reaction::Nothing
        );
        assert_eq!(s.ingest(":alice!a@h PRIVMSG #other :hi"), Reaction::Nothing);
    }

    #[test]
    fn test_error_closes() {
        let mut s = session();
        assert_eq!(s.ingest("ERROR :Closing link"), Reaction::Closed);
    }
}
