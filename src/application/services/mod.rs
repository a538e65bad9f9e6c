//! Application services - Business logic orchestration

pub mod help_desk;
pub mod message_service;

pub use help_desk::HelpDesk;
pub use message_service::MessageService;
