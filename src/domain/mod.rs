// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One subdirectory per aggregate, each with its value objects, events,
// commands, errors, aggregate implementation, and command handler. This
// layer is completely separate from the event sourcing infrastructure.
//
// ============================================================================

pub mod post;
