use std::sync::Arc;

use super::aggregate::PostAggregate;
use super::commands::{CommandEnvelope, PostCommand};
use super::errors::PostError;
use super::events::PostEvent;
use crate::event_sourcing::core::{Aggregate, DomainEvent, EventEnvelope, ReplayEngine};
use crate::event_sourcing::store::{EventSink, EventStreamReader};

// ============================================================================
// Post Command Handler
// ============================================================================
//
// Orchestrates: Command → Replay → Aggregate → Event → Sink
//
// Both collaborators are injected; the handler holds no other state, so
// every command is an independent, stateless request.
//
// ============================================================================

pub struct PostCommandHandler<R, S> {
    replay: ReplayEngine<PostAggregate, R>,
    sink: Arc<S>,
}

impl<R, S> PostCommandHandler<R, S>
where
    R: EventStreamReader<PostEvent>,
    S: EventSink<PostEvent>,
{
    pub fn new(reader: Arc<R>, sink: Arc<S>) -> Self {
        Self {
            replay: ReplayEngine::new(reader),
            sink,
        }
    }

    /// Transport boundary: raw JSON command envelope in, new state out.
    pub async fn handle_raw(&self, raw: &str) -> Result<PostAggregate, PostError> {
        let command = CommandEnvelope::parse(raw)?.decode()?;
        self.handle(command).await
    }

    /// Replay current state, perform the command against it, and hand the
    /// produced event to the emission collaborator. The two awaits are the
    /// only I/O; everything between them is pure.
    pub async fn handle(&self, command: PostCommand) -> Result<PostAggregate, PostError> {
        let state = self.replay.replay(command.target_id()).await?;

        let (next, event) = PostAggregate::perform(state.as_ref(), &command)?;

        let envelope = EventEnvelope::new(
            next.aggregate_id(),
            next.version(),
            event.event_type(),
            event,
        );
        self.sink.emit(&envelope).await?;

        Ok(next)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
