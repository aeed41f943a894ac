//! HTTP handlers for dev events and their speakers.

pub mod dev_events;
pub use dev_events::*;
