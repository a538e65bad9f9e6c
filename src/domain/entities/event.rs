//! Transport events flowing into the core and actions flowing out of it

/// Inbound event delivered by a transport adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Registration with the server completed.
    Welcome,
    /// The requested nickname is already taken.
    NickCollision,
    /// A line spoken in the channel.
    PublicMessage { sender: String, text: String },
    /// A line sent directly to the bot.
    PrivateMessage { sender: String, text: String },
}

impl Event {
    pub fn public(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Event::PublicMessage {
            sender: sender.into(),
            text: text.into(),
        }
    }

    pub fn private(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Event::PrivateMessage {
            sender: sender.into(),
            text: text.into(),
        }
    }
}

/// Action the core asks the transport to perform, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Send one line of text to a channel or a nickname.
    Message { target: String, text: String },
    /// Join a channel.
    Join(String),
    /// Request a new nickname.
    Nick(String),
    /// Leave the network and stop the process.
    Quit(String),
}

impl Outbound {
    pub fn message(target: impl Into<String>, text: impl Into<String>) -> Self {
        Outbound::Message {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Outbound::Quit(_))
    }
}
