// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain entities and the events they emit. Each entity has its own
// subdirectory with value objects, events, errors, the entity itself and
// the handlers that consume its events.
//
// This layer only depends on the dispatcher contract in event_dispatch.
//
// ============================================================================

pub mod customer;
