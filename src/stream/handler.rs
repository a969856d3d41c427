//! Axum SSE endpoint for the event stream.
//!
//! `GET /events/stream[?workspaceId=<integer>]` subscribes the caller
//! to a persistent `text/event-stream`. Each event's `data` field is a
//! serialized [`StreamMessage`] envelope. Events are forwarded in bus
//! delivery order with no buffering layer; lagging clients have their
//! oldest events dropped (logged).

use std::convert::Infallible;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use serde::Deserialize;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::{Stream, StreamExt};
use utoipa::IntoParams;

use crate::app_state::AppState;
use crate::domain::{ScheduleEvent, WorkspaceId};
use crate::stream::StreamMessage;

/// Query parameters for the stream endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StreamParams {
    /// Restricts the stream to one workspace. Absent means all
    /// workspaces visible to the caller.
    #[serde(rename = "workspaceId")]
    #[param(value_type = Option<i64>)]
    pub workspace_id: Option<WorkspaceId>,
}

/// `GET /events/stream` — Subscribe to server-push scheduling events.
#[utoipa::path(
    get,
    path = "/events/stream",
    tag = "Stream",
    summary = "Subscribe to the event stream",
    description = "Opens a persistent text/event-stream. Each event's data field is a `{type, payload}` envelope, optionally filtered to one workspace.",
    params(StreamParams),
    responses(
        (status = 200, description = "SSE stream of StreamMessage envelopes"),
    )
)]
pub async fn stream_handler(
    State(state): State<AppState>,
    Query(params): Query<StreamParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!(workspace = ?params.workspace_id, "sse client connected");

    let stream = event_stream(state.event_bus.subscribe(), params.workspace_id);
    Sse::new(stream).keep_alive(KeepAlive::new().interval(state.sse_keep_alive))
}

/// Adapts a bus receiver into an SSE event stream filtered by scope.
fn event_stream(
    rx: broadcast::Receiver<ScheduleEvent>,
    scope: Option<WorkspaceId>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    BroadcastStream::new(rx).filter_map(move |item| match item {
        Ok(event) if in_scope(&event, scope) => to_sse_event(&event).map(Ok),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(lagged = n, "sse client lagged behind event bus");
            None
        }
    })
}

/// Returns `true` when the event matches the subscription scope.
/// An absent scope matches every workspace.
fn in_scope(event: &ScheduleEvent, scope: Option<WorkspaceId>) -> bool {
    scope.is_none_or(|ws| event.workspace_id() == ws)
}

/// Serializes an event into an SSE frame; serialization failures are
/// logged and the event skipped.
fn to_sse_event(event: &ScheduleEvent) -> Option<Event> {
    let message = StreamMessage::from_event(event);
    match serde_json::to_string(&message) {
        Ok(json) => Some(Event::default().data(json)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize stream message");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::EventBus;
    use chrono::Utc;

    fn shift_created(workspace_id: WorkspaceId) -> ScheduleEvent {
        ScheduleEvent::ShiftCreated {
            workspace_id,
            shift_id: 1,
            user_id: None,
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn absent_scope_matches_every_workspace() {
        assert!(in_scope(&shift_created(WorkspaceId::new(1)), None));
        assert!(in_scope(&shift_created(WorkspaceId::new(99)), None));
    }

    #[test]
    fn scope_matches_only_its_workspace() {
        let scope = Some(WorkspaceId::new(1));
        assert!(in_scope(&shift_created(WorkspaceId::new(1)), scope));
        assert!(!in_scope(&shift_created(WorkspaceId::new(2)), scope));
    }

    #[test]
    fn events_serialize_into_sse_frames() {
        assert!(to_sse_event(&shift_created(WorkspaceId::new(1))).is_some());
    }

    #[tokio::test]
    async fn stream_filters_out_of_scope_events() {
        let bus = EventBus::new(16);
        let stream = event_stream(bus.subscribe(), Some(WorkspaceId::new(1)));

        bus.publish(shift_created(WorkspaceId::new(1)));
        bus.publish(shift_created(WorkspaceId::new(2)));
        bus.publish(shift_created(WorkspaceId::new(1)));
        drop(bus);

        let delivered: Vec<_> = stream.collect().await;
        assert_eq!(delivered.len(), 2);
    }

    #[tokio::test]
    async fn unscoped_stream_delivers_everything() {
        let bus = EventBus::new(16);
        let stream = event_stream(bus.subscribe(), None);

        bus.publish(shift_created(WorkspaceId::new(1)));
        bus.publish(shift_created(WorkspaceId::new(2)));
        drop(bus);

        let delivered: Vec<_> = stream.collect().await;
        assert_eq!(delivered.len(), 2);
    }
}
