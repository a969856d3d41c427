//! Shared application state injected into all Axum handlers.

use std::time::Duration;

use crate::domain::EventBus;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event bus feeding the SSE stream endpoint.
    pub event_bus: EventBus,
    /// Interval between SSE keep-alive comments.
    pub sse_keep_alive: Duration,
}
