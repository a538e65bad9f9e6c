//! Message parser - Splits raw text into command invocations

/// A command name and its arguments, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lower-cased command name
    pub name: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Arguments joined back with single spaces.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Parses incoming text into invocations
pub struct MessageParser {
    command_char: char,
}

impl MessageParser {
    pub fn new(command_char: char) -> Self {
        Self { command_char }
    }

    pub fn command_char(&self) -> char {
        self.command_char
    }

    /// Parse a channel line; only lines starting with the command character
    /// are commands.
    pub fn parse_public(&self, text: &str) -> Option<Invocation> {
        let body = text.strip_prefix(self.command_char)?;
        Self::parse_words(body)
    }

    /// Parse a direct message; every non-empty message is a command.
    pub fn parse_private(&self, text: &str) -> Option<Invocation> {
        Self::parse_words(text)
    }

    fn parse_words(text: &str) -> Option<Invocation> {
        let mut words = text.split_whitespace();
        let name = words.next()?.to_lowercase();
        let args = words.map(|s| s.to_string()).collect();
        Some(Invocation { name, args })
    }
}
