// ============================================================================
// Event Store Collaborators
// ============================================================================
//
// The two capabilities this core consumes: reading an aggregate's ordered
// history and handing produced events to the durable log. Persistence
// itself lives behind these traits; the bundled in-memory store serves the
// demo binary and the handler tests.
//
// ============================================================================

pub mod memory;
pub mod reader;
pub mod sink;

pub use memory::InMemoryEventStore;
pub use reader::EventStreamReader;
pub use sink::{EventSink, TracingEventSink};
