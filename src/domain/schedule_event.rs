//! Domain events reflecting scheduling state mutations.
//!
//! Every state change emits a [`ScheduleEvent`] through the
//! [`super::EventBus`]. Events are broadcast to SSE subscribers as
//! [`crate::stream::StreamMessage`] envelopes, where the message type
//! string returned by [`ScheduleEvent::message_type`] selects the
//! client-side handler.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::WorkspaceId;

/// Kind of membership change within a workspace.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipChange {
    /// A user joined the workspace.
    Added,
    /// A user left or was removed from the workspace.
    Removed,
    /// A user's role within the workspace changed.
    RoleChanged,
}

/// Domain event emitted after every scheduling state mutation.
///
/// Serialized untagged: the envelope carries the discriminator
/// separately as the message type string, so the payload is just the
/// variant's fields.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScheduleEvent {
    /// Emitted when a new shift is created.
    ShiftCreated {
        /// Workspace the shift belongs to.
        workspace_id: WorkspaceId,
        /// Shift identifier.
        shift_id: i64,
        /// Assigned user, if any.
        user_id: Option<i64>,
        /// Shift start time.
        starts_at: DateTime<Utc>,
        /// Shift end time.
        ends_at: DateTime<Utc>,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when an existing shift changes (times, assignment).
    ShiftUpdated {
        /// Workspace the shift belongs to.
        workspace_id: WorkspaceId,
        /// Shift identifier.
        shift_id: i64,
        /// Assigned user after the update, if any.
        user_id: Option<i64>,
        /// Shift start time after the update.
        starts_at: DateTime<Utc>,
        /// Shift end time after the update.
        ends_at: DateTime<Utc>,
        /// Update timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a shift is deleted.
    ShiftDeleted {
        /// Workspace the shift belonged to.
        workspace_id: WorkspaceId,
        /// Shift identifier.
        shift_id: i64,
        /// Deletion timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a workspace membership changes.
    MembershipChanged {
        /// Workspace whose membership changed.
        workspace_id: WorkspaceId,
        /// Affected user.
        user_id: i64,
        /// What kind of change occurred.
        change: MembershipChange,
        /// Change timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when workspace metadata (e.g. name) changes.
    WorkspaceUpdated {
        /// Updated workspace.
        workspace_id: WorkspaceId,
        /// Workspace name after the update.
        name: String,
        /// Update timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl ScheduleEvent {
    /// Returns the workspace this event is scoped to.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        match self {
            Self::ShiftCreated { workspace_id, .. }
            | Self::ShiftUpdated { workspace_id, .. }
            | Self::ShiftDeleted { workspace_id, .. }
            | Self::MembershipChanged { workspace_id, .. }
            | Self::WorkspaceUpdated { workspace_id, .. } => *workspace_id,
        }
    }

    /// Returns the message type string used as the dispatch key in
    /// [`crate::stream::StreamMessage`] envelopes.
    #[must_use]
    pub const fn message_type(&self) -> &'static str {
        match self {
            Self::ShiftCreated { .. } => "shift.created",
            Self::ShiftUpdated { .. } => "shift.updated",
            Self::ShiftDeleted { .. } => "shift.deleted",
            Self::MembershipChanged { .. } => "membership.changed",
            Self::WorkspaceUpdated { .. } => "workspace.updated",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn shift_updated_message_type() {
        let event = ScheduleEvent::ShiftUpdated {
            workspace_id: WorkspaceId::new(1),
            shift_id: 5,
            user_id: Some(9),
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.message_type(), "shift.updated");
    }

    #[test]
    fn payload_serializes_without_tag() {
        let event = ScheduleEvent::ShiftDeleted {
            workspace_id: WorkspaceId::new(3),
            shift_id: 11,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&event).unwrap_or_default();
        assert_eq!(value.get("workspace_id"), Some(&serde_json::json!(3)));
        assert_eq!(value.get("shift_id"), Some(&serde_json::json!(11)));
        // Untagged: no discriminator field inside the payload.
        assert!(value.get("event").is_none());
        assert!(value.get("type").is_none());
    }

    #[test]
    fn workspace_id_accessor() {
        let id = WorkspaceId::new(8);
        let event = ScheduleEvent::MembershipChanged {
            workspace_id: id,
            user_id: 2,
            change: MembershipChange::Added,
            timestamp: Utc::now(),
        };
        assert_eq!(event.workspace_id(), id);
    }

    #[test]
    fn membership_change_serializes_snake_case() {
        let json = serde_json::to_string(&MembershipChange::RoleChanged).unwrap_or_default();
        assert_eq!(json, r#""role_changed""#);
    }
}
