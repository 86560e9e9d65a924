// ============================================================================
// Event Sourcing Core - Generic Abstractions
// ============================================================================
//
// No domain-specific code here. Everything is generic over the aggregate,
// its command union, and its event union.
//
// ============================================================================

pub mod aggregate;
pub mod event;
pub mod replay;

pub use aggregate::Aggregate;
pub use event::{deserialize_event, serialize_event, DomainEvent, EventEnvelope};
pub use replay::ReplayEngine;
