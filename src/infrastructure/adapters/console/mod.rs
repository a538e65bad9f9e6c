//! Console adapter for development/testing
//!
//! Each input line is one event:
//! - `nick: text` is said in the channel (the speaker joins if needed)
//! - `nick> text` is a direct message to the bot
//! - `/join`, `/part`, `/op`, `/deop`, `/voice`, `/devoice` followed by a
//!   nick edit the roster

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::application::errors::BotError;
use crate::domain::entities::{Event, Outbound};
use crate::domain::traits::{Bot, BotInfo, Roster};
use crate::infrastructure::roster::MemoryRoster;

/// Console bot adapter for local development
pub struct ConsoleAdapter<R> {
    nickname: String,
    channel: String,
    reader: R,
    roster: MemoryRoster,
    welcomed: bool,
    sent: Vec<Outbound>,
}

impl ConsoleAdapter<BufReader<Stdin>> {
    pub fn stdin(nickname: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::from_reader(nickname, channel, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleAdapter<R> {
    pub fn from_reader(nickname: impl Into<String>, channel: impl Into<String>, reader: R) -> Self {
        Self {
            nickname: nickname.into(),
            channel: channel.into(),
            reader,
            roster: MemoryRoster::new(),
            welcomed: false,
            sent: Vec::new(),
        }
    }

    /// Everything executed so far, in order.
    pub fn sent(&self) -> &[Outbound] {
        &self.sent
    }

    /// Apply a roster edit; `None` when the line is not one.
    fn roster_command(&mut self, line: &str) -> Option<()> {
        let rest = line.strip_prefix('/')?;
        let (verb, nick) = rest.split_once(char::is_whitespace)?;
        let nick = nick.trim();
        if nick.is_empty() {
            return None;
        }

        match verb {
            "join" => self.roster.join(nick),
            "part" => {
                self.roster.part(nick);
            }
            "op" | "deop" => {
                self.roster.set_operator(nick, verb == "op");
            }
            "voice" | "devoice" => {
                self.roster.set_voiced(nick, verb == "voice");
            }
            _ => return None,
        }
        Some(())
    }

    fn parse_event(&mut self, line: &str) -> Option<Event> {
        let split = line.find(&[':', '>'][..])?;
        let nick = line[..split].trim();
        if nick.is_empty() || nick.contains(char::is_whitespace) {
            return None;
        }
        let text = line[split + 1..].trim_start();

        if line[split..].starts_with('>') {
            Some(Event::private(nick, text))
        } else {
            self.roster.join(nick);
            Some(Event::public(nick, text))
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Bot for ConsoleAdapter<R> {
    async fn start(&mut self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<Event>, BotError> {
        if !self.welcomed {
            self.welcomed = true;
            return Ok(Some(Event::Welcome));
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if self.roster_command(line).is_some() {
                continue;
            }
            match self.parse_event(line) {
                Some(event) => return Ok(Some(event)),
                None => tracing::warn!("Ignoring console line: {}", line),
            }
        }
    }

    async fn execute(&mut self, action: &Outbound) -> Result<(), BotError> {
        match action {
            Outbound::Message { target, text } => println!("[{} -> {}] {}", self.nickname, target, text),
            Outbound::Join(channel) => {
                self.channel = channel.clone();
                println!("[BOT] joined {}", channel);
            }
            Outbound::Nick(nick) => {
                self.nickname = nick.clone();
                println!("[BOT] now known as {}", nick);
            }
            Outbound::Quit(message) => println!("[BOT] quit: {}", message),
        }
        self.sent.push(action.clone());
        Ok(())
    }

    fn roster(&self) -> &dyn Roster {
        &self.roster
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo {
            platform: "console".to_string(),
            nickname: self.nickname.clone(),
            channel: self.channel.clone(),
        }
    }
}
