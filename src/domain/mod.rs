//! Domain layer: workspace identity, scheduling events, and the
//! event bus.
//!
//! Every state mutation in the scheduling system emits a
//! [`ScheduleEvent`] through the [`EventBus`], from which SSE clients
//! receive workspace-scoped push notifications.

pub mod event_bus;
pub mod schedule_event;
pub mod workspace_id;

pub use event_bus::EventBus;
pub use schedule_event::{MembershipChange, ScheduleEvent};
pub use workspace_id::WorkspaceId;
