//! Request bodies and view models. These are the only shapes seen on the wire
//! besides the created [`DevEvent`](super::DevEvent) returned by POST.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of POST / and PUT /{id}.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEventInput {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Body of POST /{id}/speakers.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEventSpeakerInput {
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_profile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEventView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Computed at read time from the end date and the server clock.
    pub has_ended: bool,
    pub speakers: Vec<DevEventSpeakerView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevEventSpeakerView {
    pub id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_profile: String,
}
