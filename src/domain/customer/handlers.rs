use std::sync::Arc;

use anyhow::Result;

use crate::event_dispatch::core::{serialize_event, EventHandler, EventType, HandlerRef};

use super::events::{CustomerAddressChanged, CustomerCreated, CustomerDispatcher, CustomerEnvelope, CustomerEvent};

// ============================================================================
// Customer Event Handlers
// ============================================================================
//
// Log-only consumers. The entity never builds these; the composition root
// does, through CustomerHandlers.
//
// ============================================================================

/// First log line for a newly created customer.
#[derive(Debug, Default)]
pub struct SendLog1Handler;

impl EventHandler<CustomerEvent> for SendLog1Handler {
    fn handle(&self, event: &CustomerEnvelope) -> Result<()> {
        tracing::info!(kind = event.kind(), "This is the first log for event {}", event.kind());
        Ok(())
    }
}

/// Second log line for a newly created customer, with the payload as JSON.
#[derive(Debug, Default)]
pub struct SendLog2Handler;

impl EventHandler<CustomerEvent> for SendLog2Handler {
    fn handle(&self, event: &CustomerEnvelope) -> Result<()> {
        let payload = serialize_event(event.payload())?;
        tracing::info!(
            kind = event.kind(),
            occurred_at = %event.occurred_at(),
            %payload,
            "This is the second log for event {}",
            event.kind()
        );
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SendAddressChangeLogHandler;

impl EventHandler<CustomerEvent> for SendAddressChangeLogHandler {
    fn handle(&self, event: &CustomerEnvelope) -> Result<()> {
        // registered under the address kind, other variants are not ours
        if let CustomerEvent::AddressChanged(changed) = event.payload() {
            tracing::info!(
                customer_id = %changed.id,
                "Address of customer {}, {} changed to: {}",
                changed.id,
                changed.name,
                changed.address
            );
        }
        Ok(())
    }
}

// ============================================================================
// Handler Factory
// ============================================================================

/// Builds fresh handler instances on every call; nothing is cached here.
pub struct CustomerHandlers;

impl CustomerHandlers {
    pub fn send_log1() -> HandlerRef<CustomerEvent> {
        Arc::new(SendLog1Handler)
    }

    pub fn send_log2() -> HandlerRef<CustomerEvent> {
        Arc::new(SendLog2Handler)
    }

    pub fn send_address_change_log() -> HandlerRef<CustomerEvent> {
        Arc::new(SendAddressChangeLogHandler)
    }

    /// Register the standard log handlers under their kinds.
    pub fn register_defaults(dispatcher: &CustomerDispatcher) {
        dispatcher.register(CustomerCreated::KIND, Self::send_log1());
        dispatcher.register(CustomerCreated::KIND, Self::send_log2());
        dispatcher.register(CustomerAddressChanged::KIND, Self::send_address_change_log());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_dispatch::core::EventEnvelope;

    fn created() -> CustomerEnvelope {
        EventEnvelope::new(CustomerEvent::Created(CustomerCreated {
            id: "1".to_string(),
            name: "Customer 1".to_string(),
        }))
    }

    #[test]
    fn test_register_defaults() {
        let dispatcher = CustomerDispatcher::new();

        CustomerHandlers::register_defaults(&dispatcher);

        assert_eq!(dispatcher.handler_count(CustomerCreated::KIND), 2);
        assert_eq!(dispatcher.handler_count(CustomerAddressChanged::KIND), 1);
        assert!(dispatcher.notify(&created()).is_ok());
    }

    #[test]
    fn test_factory_builds_fresh_instances() {
        let dispatcher = CustomerDispatcher::new();
        let first = CustomerHandlers::send_log1();
        dispatcher.register(CustomerCreated::KIND, first.clone());

        // a second instance is a different handler as far as the registry cares
        assert!(dispatcher
            .unregister(CustomerCreated::KIND, &CustomerHandlers::send_log1())
            .is_err());
        assert!(dispatcher.unregister(CustomerCreated::KIND, &first).is_ok());
    }

    #[test]
    fn test_default_handlers_receive_address_change() {
        let dispatcher = CustomerDispatcher::new();
        CustomerHandlers::register_defaults(&dispatcher);
        let event = EventEnvelope::new(CustomerEvent::AddressChanged(CustomerAddressChanged {
            id: "1".to_string(),
            name: "Customer 1".to_string(),
            address: "Street, 123, 12345-678 City".to_string(),
        }));

        assert!(dispatcher.notify(&event).is_ok());
        // the JSON path of the second log handler works for every variant
        assert!(SendLog2Handler.handle(&event).is_ok());
        assert!(SendAddressChangeLogHandler.handle(&event).is_ok());
    }

    #[test]
    fn test_address_handler_ignores_other_events() {
        assert!(SendAddressChangeLogHandler.handle(&created()).is_ok());
    }

    #[test]
    fn test_handler_names() {
        assert!(CustomerHandlers::send_log2().name().ends_with("SendLog2Handler"));
    }
}
