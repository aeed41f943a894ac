//! In-memory implementation of [`DevEventStore`].
//!
//! Keeps the same loaded-relation contracts as the PostgreSQL store, cascade
//! on delete included. Used by the handler tests and by `DEV_EVENTS_STORE=memory`.

use super::DevEventStore;
use crate::error::AppError;
use crate::model::{DevEvent, DevEventSpeaker};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    /// Event rows; the `speakers` field is always empty here.
    events: HashMap<Uuid, DevEvent>,
    /// Speaker rows in insertion order.
    speakers: Vec<DevEventSpeaker>,
}

impl Tables {
    fn with_speakers(&self, event: &DevEvent) -> DevEvent {
        let mut event = event.clone();
        event.speakers = self
            .speakers
            .iter()
            .filter(|s| s.dev_event_id == event.id)
            .cloned()
            .collect();
        event
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDevEventStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDevEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of speaker rows across all events.
    pub async fn speaker_count(&self) -> usize {
        self.tables.read().await.speakers.len()
    }
}

#[async_trait]
impl DevEventStore for MemoryDevEventStore {
    async fn list_with_speakers(&self) -> Result<Vec<DevEvent>, AppError> {
        let tables = self.tables.read().await;
        let mut events: Vec<DevEvent> = tables.events.values().map(|e| tables.with_speakers(e)).collect();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_with_speakers(&self, id: Uuid) -> Result<Option<DevEvent>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.events.get(&id).map(|e| tables.with_speakers(e)))
    }

    async fn find(&self, id: Uuid) -> Result<Option<DevEvent>, AppError> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.tables.read().await.events.contains_key(&id))
    }

    async fn insert(&self, event: &DevEvent) -> Result<(), AppError> {
        let mut row = event.clone();
        row.speakers.clear();
        self.tables.write().await.events.insert(row.id, row);
        Ok(())
    }

    async fn update(&self, event: &DevEvent) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.events.get_mut(&event.id) {
            row.update(
                event.title.clone(),
                event.description.clone(),
                event.start_date,
                event.end_date,
            );
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if tables.events.remove(&id).is_some() {
            tables.speakers.retain(|s| s.dev_event_id != id);
        }
        Ok(())
    }

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        // Mirrors the foreign key: a speaker row needs its event.
        if tables.events.contains_key(&speaker.dev_event_id) {
            tables.speakers.push(speaker.clone());
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(title: &str, start_hour: u32) -> DevEvent {
        DevEvent::new(
            title.into(),
            "desc".into(),
            Utc.with_ymd_and_hms(2024, 6, 27, start_hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 27, start_hour + 1, 0, 0).unwrap(),
        )
    }

    fn speaker(name: &str, event_id: Uuid) -> DevEventSpeaker {
        DevEventSpeaker {
            id: Uuid::new_v4(),
            name: name.into(),
            talk_title: "talk".into(),
            talk_description: "about".into(),
            linked_in_profile: name.to_lowercase(),
            dev_event_id: event_id,
        }
    }

    #[tokio::test]
    async fn find_does_not_load_speakers_but_find_with_speakers_does() {
        let store = MemoryDevEventStore::new();
        let e = event("Meetup", 10);
        store.insert(&e).await.unwrap();
        store.insert_speaker(&speaker("Ana", e.id)).await.unwrap();

        let bare = store.find(e.id).await.unwrap().unwrap();
        assert!(bare.speakers.is_empty());

        let full = store.find_with_speakers(e.id).await.unwrap().unwrap();
        assert_eq!(full.speakers.len(), 1);
        assert_eq!(full.speakers[0].name, "Ana");
    }

    #[tokio::test]
    async fn list_orders_by_start_date_and_keeps_speaker_order() {
        let store = MemoryDevEventStore::new();
        let late = event("Late", 15);
        let early = event("Early", 9);
        store.insert(&late).await.unwrap();
        store.insert(&early).await.unwrap();
        store.insert_speaker(&speaker("First", early.id)).await.unwrap();
        store.insert_speaker(&speaker("Second", early.id)).await.unwrap();

        let events = store.list_with_speakers().await.unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Late"]);
        let names: Vec<&str> = events[0].speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(events[1].speakers.is_empty());
    }

    #[tokio::test]
    async fn update_leaves_speakers_alone() {
        let store = MemoryDevEventStore::new();
        let mut e = event("Meetup", 10);
        store.insert(&e).await.unwrap();
        store.insert_speaker(&speaker("Ana", e.id)).await.unwrap();

        e.update("Renamed".into(), "new".into(), e.start_date, e.end_date);
        store.update(&e).await.unwrap();

        let stored = store.find_with_speakers(e.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.description, "new");
        assert_eq!(stored.speakers.len(), 1);
    }

    #[tokio::test]
    async fn delete_cascades_to_speakers_of_that_event_only() {
        let store = MemoryDevEventStore::new();
        let a = event("A", 10);
        let b = event("B", 11);
        store.insert(&a).await.unwrap();
        store.insert(&b).await.unwrap();
        store.insert_speaker(&speaker("Ana", a.id)).await.unwrap();
        store.insert_speaker(&speaker("Bob", b.id)).await.unwrap();

        store.delete(a.id).await.unwrap();

        assert!(!store.exists(a.id).await.unwrap());
        assert!(store.exists(b.id).await.unwrap());
        assert_eq!(store.speaker_count().await, 1);
    }

    #[tokio::test]
    async fn speaker_without_event_is_not_stored() {
        let store = MemoryDevEventStore::new();
        store.insert_speaker(&speaker("Ghost", Uuid::new_v4())).await.unwrap();
        assert_eq!(store.speaker_count().await, 0);
    }
}
