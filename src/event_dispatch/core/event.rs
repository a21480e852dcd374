use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Event Kind & Payload Traits
// ============================================================================

/// Stable identifier used as the registry key.
///
/// Producers and registrants must agree on the exact value, so it is always
/// taken from [`EventType::KIND`] rather than spelled out by hand.
pub type EventKind = &'static str;

/// Implemented by every concrete event struct. The kind is fixed per type.
pub trait EventType {
    const KIND: EventKind;
}

/// Anything that can travel through a dispatcher.
///
/// Union enums implement this by delegating to the variant's `KIND`.
pub trait EventPayload: Clone + Send + Sync {
    fn kind(&self) -> EventKind;
}

// ============================================================================
// Event Envelope
// ============================================================================

/// Immutable event value: payload plus the metadata every handler sees.
///
/// Built exactly once, at the state transition that triggers it. The
/// dispatcher never retains it past `notify`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventEnvelope<P> {
    event_id: Uuid,
    kind: EventKind,
    occurred_at: DateTime<Utc>,
    payload: P,
}

impl<P: EventPayload> EventEnvelope<P> {
    pub fn new(payload: P) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            kind: payload.kind(),
            occurred_at: Utc::now(),
            payload,
        }
    }
}

impl<P> EventEnvelope<P> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}

// ============================================================================
// Event Serialization Helper
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        data: String,
    }

    impl EventType for TestEvent {
        const KIND: EventKind = "TestEvent";
    }

    impl EventPayload for TestEvent {
        fn kind(&self) -> EventKind {
            Self::KIND
        }
    }

    #[test]
    fn test_envelope_takes_kind_from_payload() {
        let before = Utc::now();
        let envelope = EventEnvelope::new(TestEvent { data: "test".to_string() });

        assert_eq!(envelope.kind(), "TestEvent");
        assert_eq!(envelope.payload().data, "test");
        assert!(envelope.occurred_at() >= before);
    }

    #[test]
    fn test_each_envelope_gets_its_own_id() {
        let first = EventEnvelope::new(TestEvent { data: "a".to_string() });
        let second = EventEnvelope::new(TestEvent { data: "a".to_string() });

        assert_ne!(first.event_id(), second.event_id());
    }

    #[test]
    fn test_event_serialization() {
        let event = TestEvent {
            data: "test data".to_string(),
        };

        let json = serialize_event(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_envelope_json_carries_kind_and_payload() {
        let envelope = EventEnvelope::new(TestEvent { data: "x".to_string() });
        let json = serialize_event(&envelope).unwrap();

        assert!(json.contains("\"kind\":\"TestEvent\""));
        assert!(json.contains("\"payload\":{\"data\":\"x\"}"));
    }
}
