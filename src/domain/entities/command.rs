use crate::application::errors::CommandError;

/// Where a command's error replies are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyScope {
    /// Spoken in the channel, addressed to the caller by name.
    Channel,
    /// Sent to the caller as a direct message.
    Direct,
}

/// Commands triggered in the channel with the command character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicCommand {
    Info,
    Help,
    Stats,
    Roll,
}

impl PublicCommand {
    pub const ALL: [PublicCommand; 4] = [
        PublicCommand::Info,
        PublicCommand::Help,
        PublicCommand::Stats,
        PublicCommand::Roll,
    ];

    /// Resolve a command name, ignoring case.
    pub fn lookup(name: &str) -> Result<Self, CommandError> {
        let lowered = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or(CommandError::Unknown(lowered))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PublicCommand::Info => "info",
            PublicCommand::Help => "help",
            PublicCommand::Stats => "stats",
            PublicCommand::Roll => "roll",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            PublicCommand::Info => "info <nick>",
            PublicCommand::Help => "help",
            PublicCommand::Stats => "stats",
            PublicCommand::Roll => "roll <diceString>",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PublicCommand::Info => "Prints information about a user.",
            PublicCommand::Help => "Prints this help dialog.",
            PublicCommand::Stats => "Prints status information about the help desk and this bot",
            PublicCommand::Roll => "Rolls dice according to the diceString (default 1d20)",
        }
    }

    pub fn error_scope(&self) -> ReplyScope {
        match self {
            PublicCommand::Info | PublicCommand::Roll => ReplyScope::Channel,
            PublicCommand::Help | PublicCommand::Stats => ReplyScope::Direct,
        }
    }
}

/// Commands sent to the bot by direct message, without a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateCommand {
    History,
    Help,
    Next,
    Purge,
    Die,
}

impl PrivateCommand {
    pub const ALL: [PrivateCommand; 5] = [
        PrivateCommand::History,
        PrivateCommand::Help,
        PrivateCommand::Next,
        PrivateCommand::Purge,
        PrivateCommand::Die,
    ];

    /// Resolve a command name, ignoring case.
    pub fn lookup(name: &str) -> Result<Self, CommandError> {
        let lowered = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or(CommandError::Unknown(lowered))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrivateCommand::History => "history",
            PrivateCommand::Help => "help",
            PrivateCommand::Next => "next",
            PrivateCommand::Purge => "purge",
            PrivateCommand::Die => "die",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            PrivateCommand::Help => "help <question>",
            other => other.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PrivateCommand::History => "Prints the last few messages said in the channel.",
            PrivateCommand::Help => "Adds your name and question to the help queue.",
            PrivateCommand::Next => "Gets the next valid person out of the help queue. (Voiced Only)",
            PrivateCommand::Purge => "Removes everybody from the help queue. (OP Only)",
            PrivateCommand::Die => "Removes the bot from the channel. (OP only)",
        }
    }
}
