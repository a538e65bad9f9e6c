//! Message handling - Event-driven message processing

pub mod dispatcher;
pub mod outbox;
pub mod parser;

pub use dispatcher::{MessageDispatcher, RouterSettings};
pub use outbox::Outbox;
pub use parser::{Invocation, MessageParser};
