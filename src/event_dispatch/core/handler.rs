use std::sync::Arc;

use anyhow::Result;

use super::event::EventEnvelope;

/// Capability invoked with every event of a kind it was registered under.
///
/// Returning an error aborts the remaining fan-out of that `notify` call.
pub trait EventHandler<P>: Send + Sync {
    fn handle(&self, event: &EventEnvelope<P>) -> Result<()>;

    /// Name used when reporting a failure from this handler.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handler reference as stored in the registry.
///
/// Identity (for `unregister`) is the allocation, compared with `Arc::ptr_eq`.
pub type HandlerRef<P> = Arc<dyn EventHandler<P>>;
