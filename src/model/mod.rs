//! Dev event records and their wire shapes.

mod entity;
mod wire;

pub use entity::{DevEvent, DevEventSpeaker};
pub use wire::{DevEventInput, DevEventSpeakerInput, DevEventSpeakerView, DevEventView};
