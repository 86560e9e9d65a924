use serde::{Deserialize, Serialize};

use super::errors::PostError;
use super::value_objects::PostId;
use crate::event_sourcing::core::DomainEvent;

// ============================================================================
// Post Domain Events
// ============================================================================

/// Union type for all post events. The serialized form is exactly the
/// outbound envelope `{ "type": ..., "payload": ... }`; every payload
/// carries the post identifier as `postId: { "id": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum PostEvent {
    CreatedContent(CreatedContent),
    DisabledContent(DisabledContent),
    EditedContent(EditedContent),
    EnabledContent(EnabledContent),
}

impl PostEvent {
    pub fn post_id(&self) -> &PostId {
        match self {
            PostEvent::CreatedContent(e) => &e.post_id,
            PostEvent::DisabledContent(e) => &e.post_id,
            PostEvent::EditedContent(e) => &e.post_id,
            PostEvent::EnabledContent(e) => &e.post_id,
        }
    }

    /// Decode a wire event. Tags outside the known set are rejected here;
    /// past this boundary the union is closed and matching is exhaustive.
    pub fn decode(json: &str) -> Result<Self, PostError> {
        serde_json::from_str(json).map_err(|_| PostError::UnrecognizedEvent)
    }
}

impl DomainEvent for PostEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PostEvent::CreatedContent(_) => "CreatedContent",
            PostEvent::DisabledContent(_) => "DisabledContent",
            PostEvent::EditedContent(_) => "EditedContent",
            PostEvent::EnabledContent(_) => "EnabledContent",
        }
    }
}

// Individual event types

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedContent {
    pub post_id: PostId,
    pub text: String,
    pub edited: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabledContent {
    pub post_id: PostId,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditedContent {
    pub post_id: PostId,
    pub text: String,
    pub edited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledContent {
    pub post_id: PostId,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_event_serializes_to_outbound_envelope_shape() {
        let event = PostEvent::CreatedContent(CreatedContent {
            post_id: PostId::new("1"),
            text: "something".to_string(),
            edited: false,
            enabled: true,
        });

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CreatedContent");
        assert_eq!(json["payload"]["postId"]["id"], "1");
        assert_eq!(json["payload"]["text"], "something");
        assert_eq!(json["payload"]["edited"], false);
        assert_eq!(json["payload"]["enabled"], true);
    }

    #[test]
    fn decode_round_trips_known_tags() {
        let json = r#"{"type":"DisabledContent","payload":{"postId":{"id":"1"},"enabled":false}}"#;

        let event = PostEvent::decode(json).unwrap();
        assert_eq!(event.event_type(), "DisabledContent");
        assert_eq!(event.post_id().as_str(), "1");
    }

    #[test]
    fn decode_rejects_unknown_tags() {
        let json = r#"{"type":"DeletedContent","payload":{"postId":{"id":"1"}}}"#;

        let result = PostEvent::decode(json);
        assert!(matches!(result.unwrap_err(), PostError::UnrecognizedEvent));
    }
}
