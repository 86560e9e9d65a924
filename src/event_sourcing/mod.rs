// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic, reusable event sourcing infrastructure.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;
pub mod store;

pub use self::core::{Aggregate, DomainEvent, EventEnvelope, ReplayEngine};
pub use self::store::{EventSink, EventStreamReader, InMemoryEventStore, TracingEventSink};
