//! Dev event routes, mounted under [`DEV_EVENTS_PATH`](super::DEV_EVENTS_PATH).

use crate::handlers::dev_events::{add_speaker, create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn dev_event_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .route("/:id/speakers", post(add_speaker))
        .with_state(state)
}
