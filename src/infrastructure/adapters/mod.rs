//! Transport adapters

pub mod console;
pub mod irc;

pub use console::ConsoleAdapter;
pub use irc::IrcAdapter;
