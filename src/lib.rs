//! Event-sourced command handling for Post content.
//!
//! `event_sourcing` holds the generic replay/emit infrastructure,
//! `domain` holds the Post aggregate and its command processing.

pub mod domain;
pub mod event_sourcing;
