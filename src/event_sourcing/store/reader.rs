use anyhow::Result;
use async_trait::async_trait;

use crate::event_sourcing::core::EventEnvelope;

/// Read side of the durable event log.
#[async_trait]
pub trait EventStreamReader<E>: Send + Sync {
    /// Fetch the full event history for one aggregate, in append order.
    /// A never-created identifier yields an empty history.
    async fn get(&self, aggregate_id: &str) -> Result<Vec<EventEnvelope<E>>>;
}
