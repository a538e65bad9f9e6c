//! Domain layer - Core help-desk logic with no I/O
//!
//! This layer contains:
//! - Entities: Core business objects (ChatLine, commands, events, queue, history)
//! - Rules: Permission guard and dice roller
//! - Traits: Abstractions for infrastructure (Bot, Roster)

pub mod entities;
pub mod rules;
pub mod traits;
