//! Router assembly.

mod common;
mod dev_events;

pub use common::common_routes;
pub use dev_events::dev_event_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const DEV_EVENTS_PATH: &str = "/api/dev-events";

/// Full application router: common routes plus the dev event API, with
/// request tracing and a request body size cap.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(DEV_EVENTS_PATH, dev_event_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
