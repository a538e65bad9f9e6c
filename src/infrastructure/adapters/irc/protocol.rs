//! IRC line parsing and command formatting (RFC 1459 subset)

/// One parsed IRC protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcMessage {
    pub prefix: Option<String>,
    pub command: String,
    pub params: Vec<String>,
}

impl IrcMessage {
    /// Parse a raw line; `None` for blank or malformed input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut rest = line.trim_end_matches(['\r', '\n']);

        // IRCv3 message tags are not used
        if rest.starts_with('@') {
            rest = rest.split_once(' ')?.1.trim_start();
        }

        let prefix = if let Some(stripped) = rest.strip_prefix(':') {
            let (prefix, tail) = stripped.split_once(' ')?;
            rest = tail.trim_start();
            Some(prefix.to_string())
        } else {
            None
        };

        let (head, trailing) = match rest.split_once(" :") {
            Some((head, trailing)) => (head, Some(trailing)),
            None => (rest, None),
        };

        let mut words = head.split_whitespace();
        let command = words.next()?.to_ascii_uppercase();
        let mut params: Vec<String> = words.map(|w| w.to_string()).collect();
        if let Some(trailing) = trailing {
            params.push(trailing.to_string());
        }

        Some(Self {
            prefix,
            command,
            params,
        })
    }

    /// Nickname part of a `nick!user@host` prefix.
    pub fn source_nick(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        Some(prefix.split(['!', '@']).next().unwrap_or(prefix))
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

fn clean(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

pub fn privmsg(target: &str, text: &str) -> String {
    format!("PRIVMSG {} :{}", clean(target), clean(text))
}

pub fn join(channel: &str) -> String {
    format!("JOIN {}", clean(channel))
}

pub fn nick(nickname: &str) -> String {
    format!("NICK {}", clean(nickname))
}

pub fn user(username: &str, realname: &str) -> String {
    format!("USER {} 0 * :{}", clean(username), clean(realname))
}

pub fn pong(token: &str) -> String {
    format!("PONG :{}", clean(token))
}

pub fn quit(message: &str) -> String {
    format!("QUIT :{}", clean(message))
}
