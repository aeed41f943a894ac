//! Dev event handlers: list, read, create, update, delete, add speaker.
//!
//! A missing event answers 204 with no body, never an error.

use crate::error::AppError;
use crate::mapping::{event_view, event_views, speaker_from_input};
use crate::model::{DevEvent, DevEventInput, DevEventSpeakerInput, DevEventView};
use crate::response::{created, no_content, ok_empty, ok_json};
use crate::routes::DEV_EVENTS_PATH;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

/// List all events with their speakers.
#[utoipa::path(
    get,
    path = "/api/dev-events",
    responses((status = 200, description = "All events", body = Vec<DevEventView>)),
    tag = "dev-events"
)]
pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.store.list_with_speakers().await?;
    Ok(ok_json(event_views(events, Utc::now())))
}

/// Get one event with its speakers.
#[utoipa::path(
    get,
    path = "/api/dev-events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = DevEventView),
        (status = 204, description = "No event with that id")
    ),
    tag = "dev-events"
)]
pub async fn read(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response, AppError> {
    match state.store.find_with_speakers(id).await? {
        Some(event) => Ok(ok_json(event_view(event, Utc::now()))),
        None => Ok(no_content()),
    }
}

/// Create an event. Responds with its location and the stored record.
#[utoipa::path(
    post,
    path = "/api/dev-events",
    request_body = DevEventInput,
    responses((status = 201, description = "Event created", body = DevEvent)),
    tag = "dev-events"
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DevEventInput>,
) -> Result<Response, AppError> {
    let event = DevEvent::from(input);
    state.store.insert(&event).await?;
    tracing::info!(id = %event.id, title = %event.title, "dev event created");
    Ok(created(format!("{}/{}", DEV_EVENTS_PATH, event.id), event))
}

/// Replace title, description and dates of an event. Speakers are untouched.
#[utoipa::path(
    put,
    path = "/api/dev-events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = DevEventInput,
    responses(
        (status = 200, description = "Event updated"),
        (status = 204, description = "No event with that id")
    ),
    tag = "dev-events"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<DevEventInput>,
) -> Result<Response, AppError> {
    let Some(mut event) = state.store.find(id).await? else {
        return Ok(no_content());
    };
    event.update(input.title, input.description, input.start_date, input.end_date);
    state.store.update(&event).await?;
    tracing::info!(%id, "dev event updated");
    Ok(ok_empty())
}

/// Delete an event and its speakers.
#[utoipa::path(
    delete,
    path = "/api/dev-events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 204, description = "No event with that id")
    ),
    tag = "dev-events"
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response, AppError> {
    if state.store.find(id).await?.is_none() {
        return Ok(no_content());
    }
    state.store.delete(id).await?;
    tracing::info!(%id, "dev event deleted");
    Ok(ok_empty())
}

/// Add a speaker to an existing event.
#[utoipa::path(
    post,
    path = "/api/dev-events/{id}/speakers",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = DevEventSpeakerInput,
    responses(
        (status = 200, description = "Speaker added"),
        (status = 204, description = "No event with that id")
    ),
    tag = "dev-events"
)]
pub async fn add_speaker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<DevEventSpeakerInput>,
) -> Result<Response, AppError> {
    if !state.store.exists(id).await? {
        return Ok(no_content());
    }
    let speaker = speaker_from_input(input, id);
    state.store.insert_speaker(&speaker).await?;
    tracing::info!(dev_event_id = %id, speaker_id = %speaker.id, "speaker added");
    Ok(ok_empty())
}
