// ============================================================================
// Customer Domain
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreated, CustomerAddressChanged)
// - Errors (CustomerError enum)
// - Entity (Customer, which emits events through its dispatcher)
// - Handlers (log handlers and their factory)
//
// The dispatch machinery itself lives in src/event_dispatch/.
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod entity;
pub mod handlers;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use entity::*;
pub use handlers::*;
