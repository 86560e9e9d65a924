use serde::Deserialize;
use serde_json::Value;

use super::errors::PostError;
use super::value_objects::PostId;

// ============================================================================
// Post Domain Commands
// ============================================================================

#[derive(Debug, Clone)]
pub enum PostCommand {
    CreateContent {
        text: String,
    },
    DisableContent {
        post_id: PostId,
    },
    EditContent {
        post_id: PostId,
        text: String,
    },
    EnableContent {
        post_id: PostId,
    },
}

impl PostCommand {
    /// Target identifier from routing metadata; creation names none.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            PostCommand::CreateContent { .. } => None,
            PostCommand::DisableContent { post_id }
            | PostCommand::EnableContent { post_id }
            | PostCommand::EditContent { post_id, .. } => Some(post_id.as_str()),
        }
    }
}

// ============================================================================
// Transport Boundary - Command Envelope Decode
// ============================================================================
//
// Inbound wire shape:
//   { "type": string, "payload": object, "meta": { "urlParams": { "postId"? } } }
//
// Decoding checks each field explicitly so failures name the offending
// field. Unknown type tags fail here; inside the crate the command union
// is closed.
//
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CommandEnvelope {
    #[serde(rename = "type")]
    pub command_type: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub meta: CommandMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandMeta {
    #[serde(default, rename = "urlParams")]
    pub url_params: UrlParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlParams {
    #[serde(default, rename = "postId")]
    pub post_id: Option<Value>,
}

impl CommandEnvelope {
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        serde_json::from_str(raw).map_err(|_| PostError::UnrecognizedCommand)
    }

    pub fn decode(self) -> Result<PostCommand, PostError> {
        match self.command_type.as_str() {
            "CreateContent" => Ok(PostCommand::CreateContent {
                text: require_string(&self.payload, "text")?,
            }),
            "DisableContent" => Ok(PostCommand::DisableContent {
                post_id: self.target()?,
            }),
            "EditContent" => Ok(PostCommand::EditContent {
                post_id: self.target()?,
                text: require_string(&self.payload, "text")?,
            }),
            "EnableContent" => Ok(PostCommand::EnableContent {
                post_id: self.target()?,
            }),
            _ => Err(PostError::UnrecognizedCommand),
        }
    }

    fn target(&self) -> Result<PostId, PostError> {
        match &self.meta.url_params.post_id {
            Some(Value::String(id)) => Ok(PostId::new(id.clone())),
            _ => Err(PostError::invalid_field("postId", "value is not a string")),
        }
    }
}

fn require_string(payload: &Value, field: &str) -> Result<String, PostError> {
    match payload.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(PostError::invalid_field(field, "value is not a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_create_content() {
        let envelope =
            CommandEnvelope::parse(r#"{"type":"CreateContent","payload":{"text":"hello"}}"#)
                .unwrap();

        let command = envelope.decode().unwrap();
        assert!(matches!(command, PostCommand::CreateContent { text } if text == "hello"));
    }

    #[test]
    fn decodes_edit_content_with_target() {
        let raw = r#"{
            "type": "EditContent",
            "payload": { "text": "something else" },
            "meta": { "urlParams": { "postId": "1" } }
        }"#;

        let command = CommandEnvelope::parse(raw).unwrap().decode().unwrap();
        match command {
            PostCommand::EditContent { post_id, text } => {
                assert_eq!(post_id.as_str(), "1");
                assert_eq!(text, "something else");
            }
            other => panic!("wrong command: {other:?}"),
        }
    }

    #[test]
    fn create_has_no_target_but_toggles_do() {
        let create = CommandEnvelope::parse(r#"{"type":"CreateContent","payload":{"text":"x"}}"#)
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(create.target_id(), None);

        let raw = r#"{"type":"DisableContent","payload":{},"meta":{"urlParams":{"postId":"7"}}}"#;
        let disable = CommandEnvelope::parse(raw).unwrap().decode().unwrap();
        assert_eq!(disable.target_id(), Some("7"));
    }

    #[test]
    fn unknown_tag_is_unrecognized() {
        let envelope =
            CommandEnvelope::parse(r#"{"type":"DestroyContent","payload":{}}"#).unwrap();

        let result = envelope.decode();
        assert!(matches!(
            result.unwrap_err(),
            PostError::UnrecognizedCommand
        ));
    }

    #[test]
    fn non_string_text_names_the_field() {
        let envelope =
            CommandEnvelope::parse(r#"{"type":"CreateContent","payload":{"text":42}}"#).unwrap();

        let err = envelope.decode().unwrap_err();
        assert_eq!(err.to_string(), "#text: value is not a string");
    }

    #[test]
    fn missing_target_names_the_routing_field() {
        let envelope =
            CommandEnvelope::parse(r#"{"type":"DisableContent","payload":{}}"#).unwrap();

        let err = envelope.decode().unwrap_err();
        assert_eq!(err.to_string(), "#postId: value is not a string");
    }

    #[test]
    fn malformed_envelope_is_unrecognized() {
        let result = CommandEnvelope::parse("not json at all");
        assert!(matches!(
            result.unwrap_err(),
            PostError::UnrecognizedCommand
        ));
    }
}
