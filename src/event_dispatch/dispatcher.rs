use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::core::{EventEnvelope, EventKind, EventPayload, HandlerRef};

// ============================================================================
// Event Dispatcher - Synchronous In-Process Fan-Out
// ============================================================================
//
// Registry: event kind -> handlers in registration order.
//
// Rules:
// 1. Duplicate registration is allowed and yields duplicate invocation
// 2. An unknown kind behaves exactly like a kind with no handlers
// 3. notify runs every handler inline, in order, on the calling thread
// 4. The first handler error stops the fan-out and goes back to the caller
//
// The registry sits behind a lock so one dispatcher can be shared between
// the composition root and any number of entities.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler not found for event kind {kind}")]
    HandlerNotFound { kind: EventKind },

    #[error("Handler {handler} failed while handling {kind}: {source}")]
    HandlerFailed {
        kind: EventKind,
        handler: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

pub struct EventDispatcher<P> {
    registry: RwLock<HashMap<EventKind, Vec<HandlerRef<P>>>>,
}

impl<P> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for EventDispatcher<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.read();
        let mut counts: Vec<_> = registry.iter().map(|(kind, h)| (*kind, h.len())).collect();
        counts.sort_unstable();
        f.debug_struct("EventDispatcher").field("handlers", &counts).finish()
    }
}

impl<P> EventDispatcher<P> {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Convenience for the common case of sharing one dispatcher.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    // A panicking handler never runs while the lock is held, and every
    // mutation below leaves the map valid, so poisoning carries no meaning.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<EventKind, Vec<HandlerRef<P>>>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EventKind, Vec<HandlerRef<P>>>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `handler` to the list for `kind`, creating the list if needed.
    pub fn register(&self, kind: EventKind, handler: HandlerRef<P>) {
        let mut registry = self.write();
        let handlers = registry.entry(kind).or_default();
        handlers.push(handler);
        tracing::debug!(kind, handlers = handlers.len(), "Registered event handler");
    }

    /// Remove the first registration of `handler` under `kind`.
    ///
    /// A handler registered twice needs two calls to disappear completely.
    pub fn unregister(&self, kind: EventKind, handler: &HandlerRef<P>) -> Result<(), DispatchError> {
        let mut registry = self.write();
        let handlers = registry
            .get_mut(kind)
            .ok_or(DispatchError::HandlerNotFound { kind })?;

        let position = handlers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, handler))
            .ok_or(DispatchError::HandlerNotFound { kind })?;

        handlers.remove(position);
        tracing::debug!(kind, handlers = handlers.len(), "Unregistered event handler");
        Ok(())
    }

    /// Drop every registration for every kind.
    pub fn unregister_all(&self) {
        self.write().clear();
        tracing::debug!("Unregistered all event handlers");
    }

    /// Snapshot of the handlers for `kind`, in registration order.
    pub fn handlers(&self, kind: EventKind) -> Vec<HandlerRef<P>> {
        self.read().get(kind).cloned().unwrap_or_default()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.read().get(kind).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read().values().all(Vec::is_empty)
    }
}

impl<P: EventPayload> EventDispatcher<P> {
    /// Deliver `event` to every handler registered under its kind.
    ///
    /// Handlers run on the calling thread in registration order and all
    /// receive the same envelope. The handler list is snapshotted first, so
    /// registry changes made by a handler take effect from the next call.
    pub fn notify(&self, event: &EventEnvelope<P>) -> Result<(), DispatchError> {
        let kind = event.kind();
        let handlers = self.handlers(kind);
        if handlers.is_empty() {
            return Ok(());
        }

        tracing::debug!(kind, event_id = %event.event_id(), handlers = handlers.len(), "Dispatching event");

        for handler in &handlers {
            handler.handle(event).map_err(|source| DispatchError::HandlerFailed {
                kind,
                handler: handler.name(),
                source,
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
