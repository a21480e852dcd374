use crate::event_dispatch::DispatchError;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    /// Activation guard; the customer stays inactive.
    #[error("Address is mandatory to activate a customer")]
    AddressMandatory,

    /// A handler failed while the customer was emitting an event.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
