//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Roster: In-memory channel roster shared by the adapters
//! - Adapters: Transport integrations (IRC, console)

pub mod adapters;
pub mod config;
pub mod roster;
