//! IRC adapter
//!
//! Plain-TCP client: registers, answers pings, keeps the channel roster
//! current, and surfaces channel and direct messages as events.
//! Reconnection is not attempted; a dropped link ends the event stream.

pub mod protocol;
pub mod session;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::application::errors::BotError;
use crate::domain::entities::{Event, Outbound};
use crate::domain::traits::{Bot, BotInfo, Roster};
use session::{IrcSession, Reaction};

/// IRC bot adapter
pub struct IrcAdapter {
    host: String,
    port: u16,
    realname: String,
    session: IrcSession,
    reader: Option<BufReader<OwnedReadHalf>>,
    writer: Option<OwnedWriteHalf>,
}

impl IrcAdapter {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        nickname: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            realname: "Help Desk Bot".to_string(),
            session: IrcSession::new(nickname, channel),
            reader: None,
            writer: None,
        }
    }

    async fn send_raw(&mut self, line: &str) -> Result<(), BotError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| BotError::Network("not connected".to_string()))?;
        tracing::trace!(">> {}", line);
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\r\n").await?;
        Ok(())
    }
}

#[async_trait]
impl Bot for IrcAdapter {
    async fn start(&mut self) -> Result<(), BotError> {
        tracing::info!("Connecting to {}:{}", self.host, self.port);
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|e| BotError::Network(format!("{}:{}: {}", self.host, self.port, e)))?;

        let (read, write) = stream.into_split();
        self.reader = Some(BufReader::new(read));
        self.writer = Some(write);

        let nickname = self.session.nickname().to_string();
        self.send_raw(&protocol::nick(&nickname)).await?;
        let user = protocol::user(&nickname, &self.realname);
        self.send_raw(&user).await?;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<Event>, BotError> {
        loop {
            let reader = self
                .reader
                .as_mut()
                .ok_or_else(|| BotError::Network("not connected".to_string()))?;
            let mut buf = Vec::new();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(None);
            }
            // Clients are not required to send UTF-8
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }
            tracing::trace!("<< {}", line);

            match self.session.ingest(line) {
                Reaction::Event(event) => return Ok(Some(event)),
                Reaction::Reply(reply) => self.send_raw(&reply).await?,
                Reaction::Closed => {
                    tracing::warn!("Server closed the link: {}", line);
                    return Ok(None);
                }
                Reaction::Nothing => {}
            }
        }
    }

    async fn execute(&mut self, action: &Outbound) -> Result<(), BotError> {
        match action {
            Outbound::Message { target, text } => {
                self.send_raw(&protocol::privmsg(target, text)).await
            }
            Outbound::Join(channel) => self.send_raw(&protocol::join(channel)).await,
            Outbound::Nick(nickname) => {
                self.session.set_nickname(nickname.as_str());
                self.send_raw(&protocol::nick(nickname)).await
            }
            Outbound::Quit(message) => {
                self.send_raw(&protocol::quit(message)).await?;
                if let Some(mut writer) = self.writer.take() {
                    writer.shutdown().await?;
                }
                self.reader = None;
                Ok(())
            }
        }
    }

    fn roster(&self) -> &dyn Roster {
        self.session.roster()
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo {
            platform: "irc".to_string(),
            nickname: self.session.nickname().to_string(),
            channel: self.session.channel().to_string(),
        }
    }
}
