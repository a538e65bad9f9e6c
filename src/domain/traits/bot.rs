use async_trait::async_trait;
use crate::domain::entities::{Event, Outbound};
use crate::domain::traits::Roster;
use crate::application::errors::BotError;

/// Bot trait - abstraction for chat transport adapters
///
/// An adapter owns the connection and the roster. It hands events to the
/// core one at a time and performs the core's outbound actions in order.
#[async_trait]
pub trait Bot: Send {
    /// Connect and register with the chat network
    async fn start(&mut self) -> Result<(), BotError>;

    /// Wait for the next inbound event; `None` once the connection is closed
    async fn next_event(&mut self) -> Result<Option<Event>, BotError>;

    /// Perform one outbound action
    async fn execute(&mut self, action: &Outbound) -> Result<(), BotError>;

    /// Current view of the channel roster
    fn roster(&self) -> &dyn Roster;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub platform: String,
    pub nickname: String,
    pub channel: String,
}
