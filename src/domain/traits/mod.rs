//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod roster;

pub use bot::{Bot, BotInfo};
pub use roster::Roster;
