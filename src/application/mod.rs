//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Help-desk queue handling and the event loop
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing, dispatching, outbound collection

pub mod errors;
pub mod messaging;
pub mod services;
