//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::messaging::RouterSettings;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server: ServerConfig,
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub nickname: String,
    pub channel: String,
    #[serde(default = "default_command_char")]
    pub command_char: String,
    #[serde(default = "default_quit_message")]
    pub quit_message: String,
}

fn default_port() -> u16 {
    6667
}

fn default_command_char() -> String {
    "!".to_string()
}

fn default_quit_message() -> String {
    "Help desk closed.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "irc.libera.chat".to_string(),
                port: default_port(),
            },
            bot: BotConfig {
                nickname: "helpdesk_bot".to_string(),
                channel: "#helpdesk".to_string(),
                command_char: default_command_char(),
                quit_message: default_quit_message(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env()
    }

    /// Apply `HELPDESK_*` environment overrides
    pub fn with_env(mut self) -> Self {
        if let Ok(host) = std::env::var("HELPDESK_SERVER") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("HELPDESK_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid HELPDESK_PORT: {}", port),
            }
        }

        if let Ok(nick) = std::env::var("HELPDESK_NICK") {
            self.bot.nickname = nick;
        }

        if let Ok(channel) = std::env::var("HELPDESK_CHANNEL") {
            self.bot.channel = channel;
        }

        if let Ok(command_char) = std::env::var("HELPDESK_COMMAND_CHAR") {
            self.bot.command_char = command_char;
        }

        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField("server.host".to_string()));
        }
        if self.bot.nickname.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.nickname".to_string()));
        }
        if self.bot.nickname.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "nickname must not contain spaces: {:?}",
                self.bot.nickname
            )));
        }
        if !self.bot.channel.starts_with(['#', '&']) || self.bot.channel.len() < 2 {
            return Err(ConfigError::InvalidValue(format!(
                "channel must start with '#' or '&': {:?}",
                self.bot.channel
            )));
        }
        self.command_char().map(|_| ())
    }

    /// The command character as a single `char`
    pub fn command_char(&self) -> Result<char, ConfigError> {
        let mut chars = self.bot.command_char.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(c),
            _ => Err(ConfigError::InvalidValue(format!(
                "command-char must be a single character: {:?}",
                self.bot.command_char
            ))),
        }
    }

    pub fn router_settings(&self) -> Result<RouterSettings, ConfigError> {
        Ok(RouterSettings {
            channel: self.bot.channel.clone(),
            nickname: self.bot.nickname.clone(),
            command_char: self.command_char()?,
            quit_message: self.bot.quit_message.clone(),
        })
    }
}
