//! OpenAPI document for the dev event API.

use crate::handlers::dev_events;
use crate::model::{DevEvent, DevEventInput, DevEventSpeaker, DevEventSpeakerInput, DevEventSpeakerView, DevEventView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Dev Events API", description = "Developer events and their speakers"),
    paths(
        dev_events::list,
        dev_events::read,
        dev_events::create,
        dev_events::update,
        dev_events::delete,
        dev_events::add_speaker,
    ),
    components(schemas(
        DevEvent,
        DevEventSpeaker,
        DevEventInput,
        DevEventSpeakerInput,
        DevEventView,
        DevEventSpeakerView,
    )),
    tags((name = "dev-events", description = "Create, read, update and delete dev events; add speakers"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/api/dev-events"));
        assert!(paths.contains(&"/api/dev-events/{id}"));
        assert!(paths.contains(&"/api/dev-events/{id}/speakers"));
    }
}
