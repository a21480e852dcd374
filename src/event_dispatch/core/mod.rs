// ============================================================================
// Event Dispatch Core - Generic Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Customer, Order, etc.)
// - Generic over event payload types
// - Producers and consumers only share the event kind
//
// ============================================================================

pub mod event;
pub mod handler;

// Re-export core types for convenience
pub use event::{serialize_event, EventEnvelope, EventKind, EventPayload, EventType};
pub use handler::{EventHandler, HandlerRef};
