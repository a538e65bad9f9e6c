//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod event;
pub mod history;
pub mod message;
pub mod queue;

pub use command::{PrivateCommand, PublicCommand, ReplyScope};
pub use event::{Event, Outbound};
pub use history::{HistoryLog, HISTORY_CAPACITY};
pub use message::ChatLine;
pub use queue::{HelpQueue, QueueEntry};
