//! Conversions between wire shapes and persisted records.

use crate::model::{
    DevEvent, DevEventInput, DevEventSpeaker, DevEventSpeakerInput, DevEventSpeakerView, DevEventView,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

impl From<DevEventInput> for DevEvent {
    fn from(input: DevEventInput) -> Self {
        DevEvent::new(input.title, input.description, input.start_date, input.end_date)
    }
}

/// Build a new speaker bound to `dev_event_id`.
pub fn speaker_from_input(input: DevEventSpeakerInput, dev_event_id: Uuid) -> DevEventSpeaker {
    DevEventSpeaker {
        id: Uuid::new_v4(),
        name: input.name,
        talk_title: input.talk_title,
        talk_description: input.talk_description,
        linked_in_profile: input.linked_in_profile,
        dev_event_id,
    }
}

impl From<DevEventSpeaker> for DevEventSpeakerView {
    fn from(speaker: DevEventSpeaker) -> Self {
        Self {
            id: speaker.id,
            name: speaker.name,
            talk_title: speaker.talk_title,
            talk_description: speaker.talk_description,
            linked_in_profile: speaker.linked_in_profile,
        }
    }
}

/// Map an event to its view model. `now` decides `has_ended`.
pub fn event_view(event: DevEvent, now: DateTime<Utc>) -> DevEventView {
    let has_ended = event.has_ended(now);
    DevEventView {
        id: event.id,
        title: event.title,
        description: event.description,
        start_date: event.start_date,
        end_date: event.end_date,
        has_ended,
        speakers: event.speakers.into_iter().map(DevEventSpeakerView::from).collect(),
    }
}

pub fn event_views(events: Vec<DevEvent>, now: DateTime<Utc>) -> Vec<DevEventView> {
    events.into_iter().map(|e| event_view(e, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 27, hour, 0, 0).unwrap()
    }

    fn input() -> DevEventInput {
        DevEventInput {
            title: "Meetup".into(),
            description: "desc".into(),
            start_date: at(10),
            end_date: at(12),
        }
    }

    #[test]
    fn input_maps_to_new_event() {
        let event = DevEvent::from(input());
        assert_eq!(event.title, "Meetup");
        assert_eq!(event.description, "desc");
        assert_eq!(event.start_date, at(10));
        assert_eq!(event.end_date, at(12));
        assert!(event.speakers.is_empty());
        assert!(!event.id.is_nil());
    }

    #[test]
    fn speaker_is_bound_to_event() {
        let event_id = Uuid::new_v4();
        let speaker = speaker_from_input(
            DevEventSpeakerInput {
                name: "Ana".into(),
                talk_title: "Go".into(),
                talk_description: "intro".into(),
                linked_in_profile: "ana".into(),
            },
            event_id,
        );
        assert_eq!(speaker.dev_event_id, event_id);
        assert_eq!(speaker.name, "Ana");
        assert_eq!(speaker.talk_title, "Go");
        assert_eq!(speaker.talk_description, "intro");
        assert_eq!(speaker.linked_in_profile, "ana");
    }

    #[test]
    fn view_carries_fields_and_speakers() {
        let mut event = DevEvent::from(input());
        let speaker = speaker_from_input(
            DevEventSpeakerInput {
                name: "Ana".into(),
                talk_title: "Go".into(),
                talk_description: "intro".into(),
                linked_in_profile: "ana".into(),
            },
            event.id,
        );
        let speaker_id = speaker.id;
        event.speakers.push(speaker);
        let id = event.id;

        let view = event_view(event, at(11));
        assert_eq!(view.id, id);
        assert_eq!(view.title, "Meetup");
        assert!(!view.has_ended);
        assert_eq!(view.speakers.len(), 1);
        assert_eq!(view.speakers[0].id, speaker_id);
        assert_eq!(view.speakers[0].linked_in_profile, "ana");
    }

    #[test]
    fn view_marks_past_events_as_ended() {
        let views = event_views(vec![DevEvent::from(input())], at(20));
        assert!(views[0].has_ended);
    }

    #[test]
    fn view_serializes_camel_case() {
        let view = event_view(DevEvent::from(input()), at(11));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["hasEnded"], false);
        assert_eq!(json["startDate"], "2024-06-27T10:00:00Z");
        assert!(json["speakers"].as_array().unwrap().is_empty());
    }
}
