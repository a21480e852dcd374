use serde::{Deserialize, Serialize};

use crate::event_dispatch::core::{EventEnvelope, EventKind, EventPayload, EventType};
use crate::event_dispatch::EventDispatcher;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Union type for all customer events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    Created(CustomerCreated),
    AddressChanged(CustomerAddressChanged),
}

impl EventPayload for CustomerEvent {
    fn kind(&self) -> EventKind {
        match self {
            CustomerEvent::Created(_) => CustomerCreated::KIND,
            CustomerEvent::AddressChanged(_) => CustomerAddressChanged::KIND,
        }
    }
}

pub type CustomerEnvelope = EventEnvelope<CustomerEvent>;
pub type CustomerDispatcher = EventDispatcher<CustomerEvent>;

// Individual event types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

impl EventType for CustomerCreated {
    const KIND: EventKind = "CustomerCreated";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    /// Textual rendering of the new address.
    pub address: String,
}

impl EventType for CustomerAddressChanged {
    const KIND: EventKind = "CustomerAddressChanged";
}

impl From<CustomerCreated> for CustomerEvent {
    fn from(event: CustomerCreated) -> Self {
        CustomerEvent::Created(event)
    }
}

impl From<CustomerAddressChanged> for CustomerEvent {
    fn from(event: CustomerAddressChanged) -> Self {
        CustomerEvent::AddressChanged(event)
    }
}
