//! Event Domain Model
//!
//! Defines the event shape shared between the views and the backend
//! data-access layer: the decoded `Event`, the wire-level `EventDocument`
//! (dates and times travel as epoch milliseconds, the backend's timestamp
//! representation), the write-side `EventPayload`, and the `EventDraft`
//! the editor form submits.
//!
//! Decoding a document is the schema boundary: documents missing required
//! text fields are rejected with a decode error instead of being rendered
//! with silent placeholders. A missing `date`/`time` on an otherwise valid
//! document is a tolerated data-integrity condition (rendered as "N/A").

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Standard event type tags offered by the editor's picker.
pub const STANDARD_EVENT_TYPES: [&str; 6] = [
    "Conference",
    "Workshop",
    "Meetup",
    "Festival",
    "Celebration",
    "Music Event",
];

/// Picker label for the free-text branch.
pub const OTHER_EVENT_TYPE: &str = "Other";

/// Returns true if `tag` is one of the standard picker tags.
pub fn is_standard_event_type(tag: &str) -> bool {
    STANDARD_EVENT_TYPES.contains(&tag)
}

/// An event as rendered by the views, decoded from a backend document.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Store-assigned opaque identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Stored type tag; free text when the creator picked "Other"
    pub event_type: String,
    /// Local calendar date; `None` is a tolerated integrity anomaly
    pub date: Option<NaiveDate>,
    /// Local time-of-day; `None` is a tolerated integrity anomaly
    pub time: Option<NaiveTime>,
    /// Identifier of the creating user
    pub owner_id: String,
    /// Server-assigned creation timestamp, used only for ordering
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Decode a backend document into an [`Event`].
    ///
    /// Missing required text fields were already rejected by serde when the
    /// document was deserialized; this step converts the backend timestamp
    /// values to local date/time-of-day and flags absent ones.
    pub fn from_document(doc: EventDocument) -> Self {
        if doc.date.is_none() || doc.time.is_none() {
            tracing::warn!(event_id = %doc.id, "event document is missing date or time");
        }

        Self {
            date: doc.date.and_then(millis_to_local).map(|dt| dt.date_naive()),
            time: doc.time.and_then(millis_to_local).map(|dt| dt.time()),
            created_at: doc.created_at.and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            id: doc.id,
            title: doc.title,
            description: doc.description,
            location: doc.location,
            event_type: doc.event_type,
            owner_id: doc.owner_id,
        }
    }
}

/// Wire shape of an event as read from the backend.
///
/// `date` and `time` are epoch milliseconds (the backend's timestamp
/// representation); `createdAt` is server-assigned. Required text fields are
/// enforced by deserialization itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_type: String,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub time: Option<i64>,
    pub owner_id: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl EventDocument {
    /// Deserialize a document from a JSON value, mapping missing required
    /// fields to a decode error.
    pub fn decode(value: serde_json::Value) -> Result<Self, SharedError> {
        serde_json::from_value(value).map_err(SharedError::from)
    }
}

/// Write shape submitted on create and update.
///
/// The id is carried in the URL and `createdAt` is assigned by the server,
/// so neither appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_type: String,
    pub date: i64,
    pub time: i64,
    pub owner_id: String,
}

/// The editor form's working copy of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Picker selection: a standard tag or [`OTHER_EVENT_TYPE`]
    pub event_type: String,
    /// Free text, required when the picker is on "Other"
    pub custom_event_type: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl EventDraft {
    /// Pre-submit validation: title, description, location, time and event
    /// type are required; the custom text is required when the picker is on
    /// "Other". The first violation is returned (the form surfaces a single
    /// message, no per-field targeting).
    pub fn validate(&self) -> Result<(), SharedError> {
        let required = [
            ("title", !self.title.trim().is_empty()),
            ("description", !self.description.trim().is_empty()),
            ("location", !self.location.trim().is_empty()),
            ("time", self.time.is_some()),
            ("eventType", !self.event_type.trim().is_empty()),
        ];
        for (field, ok) in required {
            if !ok {
                return Err(SharedError::validation(field, "Please fill out all fields."));
            }
        }
        if self.event_type == OTHER_EVENT_TYPE && self.custom_event_type.trim().is_empty() {
            return Err(SharedError::validation(
                "customEventType",
                "Please fill out all fields.",
            ));
        }
        Ok(())
    }

    /// The type tag that gets stored: the custom text when the picker is on
    /// "Other", the selected tag otherwise.
    pub fn resolved_event_type(&self) -> &str {
        if self.event_type == OTHER_EVENT_TYPE {
            self.custom_event_type.trim()
        } else {
            &self.event_type
        }
    }

    /// Build the flat record submitted to the backend, tagged with the
    /// acting user. Must only be called on a draft that passed
    /// [`EventDraft::validate`]; an absent date falls back to today.
    pub fn to_payload(&self, owner_id: &str) -> EventPayload {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let time = self.time.unwrap_or_default();
        EventPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            event_type: self.resolved_event_type().to_string(),
            date: local_to_millis(date, NaiveTime::default()),
            time: local_to_millis(date, time),
            owner_id: owner_id.to_string(),
        }
    }
}

/// Convert epoch milliseconds to a local date-time.
pub fn millis_to_local(ms: i64) -> Option<DateTime<Local>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.with_timezone(&Local))
}

/// Convert a local calendar date plus time-of-day to epoch milliseconds.
pub fn local_to_millis(date: NaiveDate, time: NaiveTime) -> i64 {
    let naive = date.and_time(time);
    match naive.and_local_timezone(Local) {
        chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        // Local midnight can be skipped by a DST jump; fall back to UTC.
        chrono::LocalResult::None => Utc.from_utc_datetime(&naive).timestamp_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> EventDraft {
        EventDraft {
            title: "Launch Party".to_string(),
            description: "Kickoff".to_string(),
            location: "HQ".to_string(),
            event_type: OTHER_EVENT_TYPE.to_string(),
            custom_event_type: "Hackathon".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            time: NaiveTime::from_hms_opt(18, 0, 0),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_empty_required_fields_fail_validation() {
        for field in ["title", "description", "location"] {
            let mut d = draft();
            match field {
                "title" => d.title.clear(),
                "description" => d.description.clear(),
                _ => d.location.clear(),
            }
            let err = d.validate().unwrap_err();
            match err {
                SharedError::ValidationError { field: f, .. } => assert_eq!(f, field),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_time_fails_validation() {
        let mut d = draft();
        d.time = None;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_other_requires_custom_text() {
        let mut d = draft();
        d.custom_event_type = "   ".to_string();
        let err = d.validate().unwrap_err();
        match err {
            SharedError::ValidationError { field, .. } => assert_eq!(field, "customEventType"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_text_not_required_for_standard_tag() {
        let mut d = draft();
        d.event_type = "Workshop".to_string();
        d.custom_event_type.clear();
        assert!(d.validate().is_ok());
        assert_eq!(d.resolved_event_type(), "Workshop");
    }

    #[test]
    fn test_payload_substitutes_custom_type() {
        let payload = draft().to_payload("user-1");
        assert_eq!(payload.event_type, "Hackathon");
        assert_eq!(payload.title, "Launch Party");
        assert_eq!(payload.owner_id, "user-1");
    }

    #[test]
    fn test_payload_round_trips_date_and_time() {
        let payload = draft().to_payload("user-1");
        let date = millis_to_local(payload.date).unwrap().date_naive();
        let time = millis_to_local(payload.time).unwrap().time();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn test_document_decode_rejects_missing_title() {
        let result = EventDocument::decode(json!({
            "id": "e1",
            "description": "Kickoff",
            "location": "HQ",
            "eventType": "Hackathon",
            "ownerId": "user-1",
        }));
        assert!(matches!(result, Err(SharedError::DecodeError { .. })));
    }

    #[test]
    fn test_document_decode_tolerates_missing_date_and_time() {
        let doc = EventDocument::decode(json!({
            "id": "e1",
            "title": "Launch Party",
            "description": "Kickoff",
            "location": "HQ",
            "eventType": "Hackathon",
            "ownerId": "user-1",
        }))
        .unwrap();
        let event = Event::from_document(doc);
        assert!(event.date.is_none());
        assert!(event.time.is_none());
    }

    #[test]
    fn test_from_document_converts_timestamps() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let doc = EventDocument {
            id: "e1".to_string(),
            title: "Launch Party".to_string(),
            description: "Kickoff".to_string(),
            location: "HQ".to_string(),
            event_type: "Hackathon".to_string(),
            date: Some(local_to_millis(date, NaiveTime::default())),
            time: Some(local_to_millis(date, time)),
            owner_id: "user-1".to_string(),
            created_at: Some(1_717_200_000_000),
        };
        let event = Event::from_document(doc);
        assert_eq!(event.date, Some(date));
        assert_eq!(event.time, Some(time));
        assert!(event.created_at.is_some());
    }

    #[test]
    fn test_standard_tag_detection() {
        assert!(is_standard_event_type("Music Event"));
        assert!(!is_standard_event_type("Hackathon"));
        assert!(!is_standard_event_type(OTHER_EVENT_TYPE));
    }
}
