use std::marker::PhantomData;
use std::sync::Arc;

use super::aggregate::Aggregate;
use crate::event_sourcing::store::EventStreamReader;

// ============================================================================
// Replay Engine
// ============================================================================
//
// Fetches an aggregate's ordered event history from the injected reader and
// folds it into current state. Read-only: no event is produced here.
//
// ============================================================================

pub struct ReplayEngine<A, R> {
    reader: Arc<R>,
    _aggregate: PhantomData<A>,
}

impl<A, R> ReplayEngine<A, R>
where
    A: Aggregate,
    A::Error: From<anyhow::Error>,
    R: EventStreamReader<A::Event>,
{
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            reader,
            _aggregate: PhantomData,
        }
    }

    /// Reconstruct the current state for a command's target. A command that
    /// names no target (the creation path) replays to an absent state
    /// without touching the store.
    ///
    /// Histories whose events appear in an illegal order abort the fold;
    /// the store's ordering guarantee means such a history is corrupt, not
    /// recoverable.
    pub async fn replay(&self, target: Option<&str>) -> Result<Option<A>, A::Error> {
        let Some(aggregate_id) = target else {
            return Ok(None);
        };

        let history = self
            .reader
            .get(aggregate_id)
            .await
            .map_err(A::Error::from)?;

        A::load_from_events(&history)
    }
}
