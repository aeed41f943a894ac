//! PostgreSQL implementation of [`DevEventStore`].

use super::DevEventStore;
use crate::error::AppError;
use crate::migration::{EVENTS_TABLE, SPEAKERS_TABLE};
use crate::model::{DevEvent, DevEventSpeaker};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl From<EventRow> for DevEvent {
    fn from(row: EventRow) -> Self {
        DevEvent {
            id: row.id,
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            speakers: Vec::new(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SpeakerRow {
    id: Uuid,
    name: String,
    talk_title: String,
    talk_description: String,
    linked_in_profile: String,
    dev_event_id: Uuid,
}

impl From<SpeakerRow> for DevEventSpeaker {
    fn from(row: SpeakerRow) -> Self {
        DevEventSpeaker {
            id: row.id,
            name: row.name,
            talk_title: row.talk_title,
            talk_description: row.talk_description,
            linked_in_profile: row.linked_in_profile,
            dev_event_id: row.dev_event_id,
        }
    }
}

/// Store backed by a connection pool. Every call checks a connection out
/// for the duration of one statement.
#[derive(Clone)]
pub struct PgDevEventStore {
    pool: PgPool,
}

impl PgDevEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load speakers for a batch of events in one query, grouped by event id.
    async fn speakers_for(&self, event_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<DevEventSpeaker>>, AppError> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let sql = format!(
            "SELECT id, name, talk_title, talk_description, linked_in_profile, dev_event_id \
             FROM {} WHERE dev_event_id = ANY($1) ORDER BY created_at, id",
            SPEAKERS_TABLE
        );
        tracing::debug!(sql = %sql, events = event_ids.len(), "query");
        let rows: Vec<SpeakerRow> = sqlx::query_as(&sql)
            .bind(event_ids)
            .fetch_all(&self.pool)
            .await?;
        let mut grouped: HashMap<Uuid, Vec<DevEventSpeaker>> = HashMap::new();
        for row in rows {
            grouped.entry(row.dev_event_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

const SELECT_EVENT: &str = "SELECT id, title, description, start_date, end_date FROM";

#[async_trait]
impl DevEventStore for PgDevEventStore {
    async fn list_with_speakers(&self) -> Result<Vec<DevEvent>, AppError> {
        let sql = format!("{} {} ORDER BY start_date, id", SELECT_EVENT, EVENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<EventRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        let mut events: Vec<DevEvent> = rows.into_iter().map(DevEvent::from).collect();
        let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        let mut speakers = self.speakers_for(&ids).await?;
        for event in &mut events {
            event.speakers = speakers.remove(&event.id).unwrap_or_default();
        }
        Ok(events)
    }

    async fn find_with_speakers(&self, id: Uuid) -> Result<Option<DevEvent>, AppError> {
        let Some(mut event) = self.find(id).await? else {
            return Ok(None);
        };
        event.speakers = self.speakers_for(&[id]).await?.remove(&id).unwrap_or_default();
        Ok(Some(event))
    }

    async fn find(&self, id: Uuid) -> Result<Option<DevEvent>, AppError> {
        let sql = format!("{} {} WHERE id = $1", SELECT_EVENT, EVENTS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<EventRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(DevEvent::from))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", EVENTS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let (exists,): (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    async fn insert(&self, event: &DevEvent) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {} (id, title, description, start_date, end_date) VALUES ($1, $2, $3, $4, $5)",
            EVENTS_TABLE
        );
        tracing::debug!(sql = %sql, id = %event.id, "query");
        sqlx::query(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, event: &DevEvent) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET title = $2, description = $3, start_date = $4, end_date = $5 WHERE id = $1",
            EVENTS_TABLE
        );
        tracing::debug!(sql = %sql, id = %event.id, "query");
        sqlx::query(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        // Speakers go with the event through ON DELETE CASCADE.
        let sql = format!("DELETE FROM {} WHERE id = $1", EVENTS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {} (id, name, talk_title, talk_description, linked_in_profile, dev_event_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
            SPEAKERS_TABLE
        );
        tracing::debug!(sql = %sql, id = %speaker.id, dev_event_id = %speaker.dev_event_id, "query");
        sqlx::query(&sql)
            .bind(speaker.id)
            .bind(&speaker.name)
            .bind(&speaker.talk_title)
            .bind(&speaker.talk_description)
            .bind(&speaker.linked_in_profile)
            .bind(speaker.dev_event_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
