use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::reader::EventStreamReader;
use super::sink::EventSink;
use crate::event_sourcing::core::{deserialize_event, serialize_event, DomainEvent, EventEnvelope};

// ============================================================================
// In-Memory Event Store
// ============================================================================
//
// Collaborator implementation for the demo binary and command handler
// tests: no database required. Rows keep the event serialized to JSON,
// mirroring what a real log stores: serialize on append, deserialize on
// load.
//
// Appends must be contiguous per aggregate. That check is this store's
// enforcement of the at-most-one-writer contract the core assumes from its
// event-store collaborator.
//
// ============================================================================

#[derive(Debug, Clone)]
struct StoredEvent {
    event_id: Uuid,
    sequence_number: i64,
    event_type: String,
    event_json: String,
    timestamp: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<String, Vec<StoredEvent>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
        }
    }

    /// Number of events recorded for one aggregate.
    pub async fn stream_len(&self, aggregate_id: &str) -> usize {
        let streams = self.streams.read().await;
        streams.get(aggregate_id).map_or(0, Vec::len)
    }
}

#[async_trait]
impl<E: DomainEvent> EventStreamReader<E> for InMemoryEventStore {
    async fn get(&self, aggregate_id: &str) -> Result<Vec<EventEnvelope<E>>> {
        let streams = self.streams.read().await;

        let Some(rows) = streams.get(aggregate_id) else {
            return Ok(Vec::new());
        };

        rows.iter()
            .map(|row| {
                let event_data: E = deserialize_event(&row.event_json)?;
                Ok(EventEnvelope {
                    event_id: row.event_id,
                    aggregate_id: aggregate_id.to_string(),
                    sequence_number: row.sequence_number,
                    event_type: row.event_type.clone(),
                    event_data,
                    timestamp: row.timestamp,
                })
            })
            .collect()
    }
}

#[async_trait]
impl<E: DomainEvent> EventSink<E> for InMemoryEventStore {
    async fn emit(&self, envelope: &EventEnvelope<E>) -> Result<()> {
        let event_json = serialize_event(&envelope.event_data)?;

        let mut streams = self.streams.write().await;
        let rows = streams.entry(envelope.aggregate_id.clone()).or_default();

        let expected = rows.last().map_or(1, |row| row.sequence_number + 1);
        if envelope.sequence_number != expected {
            bail!(
                "sequence conflict on {}: expected {}, got {}",
                envelope.aggregate_id,
                expected,
                envelope.sequence_number
            );
        }

        rows.push(StoredEvent {
            event_id: envelope.event_id,
            sequence_number: envelope.sequence_number,
            event_type: envelope.event_type.clone(),
            event_json,
            timestamp: envelope.timestamp,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        data: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str {
            "TestEvent"
        }
    }

    fn envelope(sequence: i64, data: &str) -> EventEnvelope<TestEvent> {
        EventEnvelope::new(
            "post-1",
            sequence,
            "TestEvent",
            TestEvent {
                data: data.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn emit_then_get_round_trips_in_order() {
        let store = InMemoryEventStore::new();

        store.emit(&envelope(1, "first")).await.unwrap();
        store.emit(&envelope(2, "second")).await.unwrap();

        let history: Vec<EventEnvelope<TestEvent>> = store.get("post-1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence_number, 1);
        assert_eq!(history[0].event_data.data, "first");
        assert_eq!(history[1].sequence_number, 2);
        assert_eq!(history[1].event_data.data, "second");
    }

    #[tokio::test]
    async fn unknown_aggregate_yields_empty_history() {
        let store = InMemoryEventStore::new();

        let history: Vec<EventEnvelope<TestEvent>> = store.get("missing").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn non_contiguous_append_is_rejected() {
        let store = InMemoryEventStore::new();

        store.emit(&envelope(1, "first")).await.unwrap();

        let result = store.emit(&envelope(3, "skipped")).await;
        assert!(result.is_err());
        assert_eq!(store.stream_len("post-1").await, 1);
    }

    #[tokio::test]
    async fn streams_are_isolated_per_aggregate() {
        let store = InMemoryEventStore::new();

        store.emit(&envelope(1, "first")).await.unwrap();

        let mut other = envelope(1, "other stream");
        other.aggregate_id = "post-2".to_string();
        store.emit(&other).await.unwrap();

        assert_eq!(store.stream_len("post-1").await, 1);
        assert_eq!(store.stream_len("post-2").await, 1);
    }
}
