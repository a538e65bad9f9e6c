//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command execution errors.
///
/// None of these are fatal: the dispatcher turns each one into reply lines
/// for the issuing user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Sorry. {0} is not a valid command.")]
    Unknown(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("You do not have permission to run this command.")]
    PermissionDenied,

    #[error("You can only have one question in the queue at a time.\nPlease wait for a volunteer to help you.")]
    DuplicateRequest,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
