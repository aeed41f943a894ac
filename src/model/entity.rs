//! Persisted records: a dev event and the speakers it owns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled developer conference or meetup.
///
/// `id` is assigned once in [`DevEvent::new`] and never changes. The event
/// exclusively owns `speakers`; removing the event removes them too.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub speakers: Vec<DevEventSpeaker>,
}

impl DevEvent {
    /// New event with a freshly generated id and no speakers.
    pub fn new(
        title: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            start_date,
            end_date,
            speakers: Vec::new(),
        }
    }

    /// Overwrite the schedule and text fields in place. Id and speakers are left alone.
    pub fn update(
        &mut self,
        title: String,
        description: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) {
        self.title = title;
        self.description = description;
        self.start_date = start_date;
        self.end_date = end_date;
    }

    /// True once `now` is past the end date.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }
}

/// A person presenting at one event.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEventSpeaker {
    pub id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_profile: String,
    pub dev_event_id: Uuid,
}
