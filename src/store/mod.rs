//! Persistence gateway for dev events and speakers.
//!
//! Each method states which relations it loads. Handlers pick the narrowest
//! one they need: `find` for update/delete, `find_with_speakers` for reads.

mod memory;
mod postgres;

pub use memory::MemoryDevEventStore;
pub use postgres::PgDevEventStore;

use crate::error::AppError;
use crate::model::{DevEvent, DevEventSpeaker};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait DevEventStore: Send + Sync {
    /// All events with speakers loaded, ordered by start date then id.
    async fn list_with_speakers(&self) -> Result<Vec<DevEvent>, AppError>;

    /// One event with speakers loaded, in insertion order.
    async fn find_with_speakers(&self, id: Uuid) -> Result<Option<DevEvent>, AppError>;

    /// One event without its speakers; `speakers` is left empty.
    async fn find(&self, id: Uuid) -> Result<Option<DevEvent>, AppError>;

    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Insert the event row. Speakers on the value are ignored.
    async fn insert(&self, event: &DevEvent) -> Result<(), AppError>;

    /// Write title, description, start and end date of an existing event.
    async fn update(&self, event: &DevEvent) -> Result<(), AppError>;

    /// Delete the event and every speaker that references it.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> Result<(), AppError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
