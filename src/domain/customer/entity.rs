use std::sync::Arc;

use crate::event_dispatch::core::EventEnvelope;

use super::errors::CustomerError;
use super::events::{CustomerAddressChanged, CustomerCreated, CustomerDispatcher, CustomerEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================
//
// Emits:
// - CustomerCreated         on construction
// - CustomerAddressChanged  on change_address
//
// Name changes, activation and reward points emit nothing.
//
// ============================================================================

#[derive(Debug)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
    event_dispatcher: Arc<CustomerDispatcher>,
}

impl Customer {
    /// Validate id and name, then announce the new customer.
    ///
    /// The dispatcher must already hold whatever handlers should observe the
    /// creation. A failing handler aborts construction.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        event_dispatcher: Arc<CustomerDispatcher>,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
            event_dispatcher,
        };
        customer.validate()?;

        customer.emit(CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        })?;

        tracing::debug!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    fn emit(&self, event: impl Into<CustomerEvent>) -> Result<(), CustomerError> {
        let envelope = EventEnvelope::new(event.into());
        self.event_dispatcher.notify(&envelope)?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn event_dispatcher(&self) -> &Arc<CustomerDispatcher> {
        &self.event_dispatcher
    }

    /// Assigns first and validates after: on error the empty name stays in place.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        self.name = name.into();
        self.validate()
    }

    /// Set the address without announcing it.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Replace the address, then emit `CustomerAddressChanged` with the new state.
    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        let rendered = address.to_string();
        self.address = Some(address);

        self.emit(CustomerAddressChanged {
            id: self.id.clone(),
            name: self.name.clone(),
            address: rendered,
        })
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressMandatory);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// No sign check: negative points are subtracted. Clamps at the `i64` bounds.
    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    /// Redirect future events to another dispatcher.
    pub fn set_event_dispatcher(&mut self, event_dispatcher: Arc<CustomerDispatcher>) {
        self.event_dispatcher = event_dispatcher;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
