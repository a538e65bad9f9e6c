//! Help-desk intake router for a chat channel.
//!
//! Members queue support questions in the channel's help queue; voiced
//! volunteers pull the next waiting member. The core is transport-agnostic
//! and processes one event at a time.

pub mod application;
pub mod domain;
pub mod infrastructure;
