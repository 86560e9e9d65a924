use super::event::EventEnvelope;

// ============================================================================
// Aggregate Root Pattern - Event Sourcing Core
// ============================================================================
//
// Key Principles:
// 1. State is derived from events (not stored directly)
// 2. Commands are validated before emitting events
// 3. Events represent facts that have already happened
// 4. Aggregates enforce business invariants
//
// ============================================================================

/// Generic aggregate contract for event-sourced entities.
///
/// Type Parameters:
/// - `Event`: the domain event union for this aggregate
/// - `Command`: the command union for this aggregate
/// - `Error`: business rule and sequencing violations
pub trait Aggregate: Sized + Send + Sync {
    type Event;
    type Command;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create the aggregate from its first event. Fails when the event is
    /// not a legal first event for a stream.
    fn apply_first_event(event: &Self::Event) -> Result<Self, Self::Error>;

    /// Fold a subsequent event into existing state. Fails when the event
    /// requires a predecessor shape the current state does not have.
    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error>;

    /// Decide which event a command produces, given the current state
    /// (`None` while the aggregate does not exist yet). Pure: no I/O, no
    /// event is persisted here.
    fn handle_command(
        state: Option<&Self>,
        command: &Self::Command,
    ) -> Result<Self::Event, Self::Error>;

    fn aggregate_id(&self) -> String;

    /// Current version: the number of events folded so far.
    fn version(&self) -> i64;

    /// Reconstruct state from an ordered event history. An empty history
    /// folds to `None`: the aggregate does not exist yet.
    fn load_from_events(
        events: &[EventEnvelope<Self::Event>],
    ) -> Result<Option<Self>, Self::Error> {
        let Some((first, rest)) = events.split_first() else {
            return Ok(None);
        };

        let mut aggregate = Self::apply_first_event(&first.event_data)?;
        for envelope in rest {
            aggregate.apply_event(&envelope.event_data)?;
        }

        Ok(Some(aggregate))
    }
}
