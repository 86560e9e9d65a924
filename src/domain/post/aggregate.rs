use serde::{Deserialize, Serialize};

use super::commands::PostCommand;
use super::errors::PostError;
use super::events::{CreatedContent, DisabledContent, EditedContent, EnabledContent, PostEvent};
use super::value_objects::PostId;
use crate::event_sourcing::core::Aggregate;

// ============================================================================
// Post Aggregate - Business Logic
// ============================================================================
//
// Fold rules: CreatedContent is the only legal first event; every other
// event requires present state; a second CreatedContent can never apply.
// Violations are OutOfSequence.
//
// State machine: Absent --Create--> Enabled;
// Enabled <--Disable/Enable--> Disabled;
// Enabled/Disabled --Edit--> same enabled-state, edited=true.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAggregate {
    pub post_id: PostId,
    pub version: i64,
    pub text: String,
    pub edited: bool,
    pub enabled: bool,
}

impl PostAggregate {
    /// Text rule shared by creation and editing.
    fn validate_text(text: &str) -> Result<(), PostError> {
        if text.is_empty() {
            return Err(PostError::invalid_field("text", "value is an empty string"));
        }
        Ok(())
    }

    /// Decide and fold in one step: handle the command against the given
    /// state, then apply the produced event. Failures short-circuit before
    /// any event exists, so a rejected command emits nothing.
    pub fn perform(
        state: Option<&Self>,
        command: &PostCommand,
    ) -> Result<(Self, PostEvent), PostError> {
        let event = Self::handle_command(state, command)?;

        let next = match state {
            None => Self::apply_first_event(&event)?,
            Some(current) => {
                let mut next = current.clone();
                next.apply_event(&event)?;
                next
            }
        };

        Ok((next, event))
    }
}

impl Aggregate for PostAggregate {
    type Event = PostEvent;
    type Command = PostCommand;
    type Error = PostError;

    fn apply_first_event(event: &PostEvent) -> Result<Self, PostError> {
        match event {
            PostEvent::CreatedContent(e) => Ok(Self {
                post_id: e.post_id.clone(),
                version: 1,
                text: e.text.clone(),
                edited: e.edited,
                enabled: e.enabled,
            }),
            _ => Err(PostError::OutOfSequence),
        }
    }

    fn apply_event(&mut self, event: &PostEvent) -> Result<(), PostError> {
        match event {
            // creation can never follow existing state
            PostEvent::CreatedContent(_) => return Err(PostError::OutOfSequence),
            PostEvent::DisabledContent(e) => {
                self.enabled = e.enabled;
            }
            PostEvent::EditedContent(e) => {
                self.text = e.text.clone();
                self.edited = e.edited;
            }
            PostEvent::EnabledContent(e) => {
                self.enabled = e.enabled;
            }
        }

        self.version += 1;
        Ok(())
    }

    fn handle_command(
        state: Option<&Self>,
        command: &PostCommand,
    ) -> Result<PostEvent, PostError> {
        match command {
            PostCommand::CreateContent { text } => {
                if let Some(existing) = state {
                    return Err(PostError::AlreadyExists(existing.post_id.id.clone()));
                }
                Self::validate_text(text)?;

                Ok(PostEvent::CreatedContent(CreatedContent {
                    post_id: PostId::generate(),
                    text: text.clone(),
                    edited: false,
                    enabled: true,
                }))
            }

            PostCommand::DisableContent { post_id } => {
                let current =
                    state.ok_or_else(|| PostError::NotFound(post_id.id.clone()))?;
                if !current.enabled {
                    return Err(PostError::AlreadyDisabled);
                }

                Ok(PostEvent::DisabledContent(DisabledContent {
                    post_id: current.post_id.clone(),
                    enabled: false,
                }))
            }

            PostCommand::EditContent { post_id, text } => {
                let current =
                    state.ok_or_else(|| PostError::NotFound(post_id.id.clone()))?;
                Self::validate_text(text)?;

                Ok(PostEvent::EditedContent(EditedContent {
                    post_id: current.post_id.clone(),
                    text: text.clone(),
                    edited: true,
                }))
            }

            PostCommand::EnableContent { post_id } => {
                let current =
                    state.ok_or_else(|| PostError::NotFound(post_id.id.clone()))?;
                if current.enabled {
                    return Err(PostError::AlreadyEnabled);
                }

                Ok(PostEvent::EnabledContent(EnabledContent {
                    post_id: current.post_id.clone(),
                    enabled: true,
                }))
            }
        }
    }

    fn aggregate_id(&self) -> String {
        self.post_id.id.clone()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
