//! Stream wire envelope: `{ "type": ..., "payload": ... }`.

use serde::{Deserialize, Serialize};

use crate::domain::ScheduleEvent;

/// Discriminated envelope carried in each SSE `data` field.
///
/// `type` selects the client-side handler; `payload` is
/// handler-specific and opaque to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamMessage {
    /// Message type discriminator (e.g. `"shift.updated"`).
    #[serde(rename = "type")]
    pub message_type: String,
    /// Handler-specific payload.
    pub payload: serde_json::Value,
}

impl StreamMessage {
    /// Creates an envelope from a type string and payload.
    #[must_use]
    pub fn new(message_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            message_type: message_type.into(),
            payload,
        }
    }

    /// Builds the envelope for a domain event: the event's message
    /// type string plus its fields serialized as the payload.
    #[must_use]
    pub fn from_event(event: &ScheduleEvent) -> Self {
        Self {
            message_type: event.message_type().to_string(),
            payload: serde_json::to_value(event).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::WorkspaceId;
    use chrono::Utc;

    #[test]
    fn envelope_uses_type_key() {
        let msg = StreamMessage::new("shift.updated", serde_json::json!({"id": 5}));
        let json = serde_json::to_string(&msg).unwrap_or_default();
        assert!(json.contains(r#""type":"shift.updated""#));
        assert!(json.contains(r#""payload":{"id":5}"#));
    }

    #[test]
    fn from_event_carries_message_type_and_fields() {
        let event = ScheduleEvent::ShiftUpdated {
            workspace_id: WorkspaceId::new(2),
            shift_id: 5,
            user_id: None,
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            timestamp: Utc::now(),
        };
        let msg = StreamMessage::from_event(&event);
        assert_eq!(msg.message_type, "shift.updated");
        assert_eq!(msg.payload.get("shift_id"), Some(&serde_json::json!(5)));
    }

    #[test]
    fn deserializes_from_wire_form() {
        let msg: Option<StreamMessage> =
            serde_json::from_str(r#"{"type":"shift.deleted","payload":{"shift_id":3}}"#).ok();
        let Some(msg) = msg else {
            panic!("expected envelope to parse");
        };
        assert_eq!(msg.message_type, "shift.deleted");
    }
}
