// ============================================================================
// Event Dispatch Infrastructure
// ============================================================================
//
// Generic, in-process publish/dispatch machinery.
// Domain-specific code is in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any event payload)
pub mod core;
pub mod dispatcher;

// Re-export for convenience
pub use self::core::*;
pub use dispatcher::{DispatchError, EventDispatcher};
