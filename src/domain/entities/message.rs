use std::fmt;

/// A single line spoken in the channel, either by a member or by the bot.
///
/// Lines are immutable once recorded; the fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    speaker: String,
    text: String,
}

impl ChatLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_line_display() {
        let line = ChatLine::new("alice", "hello there");
        assert_eq!(line.speaker(), "alice");
        assert_eq!(line.text(), "hello there");
        assert_eq!(line.to_string(), "alice: hello there");
    }
}
