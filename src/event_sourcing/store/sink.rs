use anyhow::Result;
use async_trait::async_trait;

use crate::event_sourcing::core::{serialize_event, DomainEvent, EventEnvelope};

/// Write side: accepted commands hand their produced event off here.
/// Delivery and retry policy belong to the implementation, not the core.
#[async_trait]
pub trait EventSink<E>: Send + Sync {
    async fn emit(&self, envelope: &EventEnvelope<E>) -> Result<()>;
}

/// Sink that reports emitted events through the tracing pipeline, standing
/// in for the downstream telemetry collaborator.
pub struct TracingEventSink;

#[async_trait]
impl<E: DomainEvent> EventSink<E> for TracingEventSink {
    async fn emit(&self, envelope: &EventEnvelope<E>) -> Result<()> {
        let payload = serialize_event(&envelope.event_data)?;

        tracing::info!(
            aggregate_id = %envelope.aggregate_id,
            sequence = envelope.sequence_number,
            event_type = %envelope.event_type,
            payload = %payload,
            "Emitted event"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug)]
    struct TestEvent {
        data: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str {
            "TestEvent"
        }
    }

    #[tokio::test]
    async fn tracing_sink_accepts_envelopes() {
        let sink = TracingEventSink;
        let event = TestEvent {
            data: "payload".to_string(),
        };
        let envelope = EventEnvelope::new("post-1", 1, event.event_type(), event);

        sink.emit(&envelope).await.unwrap();
    }
}
